// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn framework specific code lives here (plus the
// Dataset / Batcher adapters in Layer 4).
//
//   model.rs      — skip-gram network: input and output
//                   embedding tables, negative-sampling loss
//
//   trainer.rs    — builds the vocabulary and training pairs,
//                   runs the epoch loop with Adam, and turns
//                   the learned input table into a model
//
//   embeddings.rs — the trained Word2VecModel: lookups,
//                   cosine similarity, nearest neighbours,
//                   JSON persistence
//
// Reference: Burn Book §3 (Building Blocks), §5 (Training)
//            Mikolov et al. (2013) word2vec

/// Skip-gram network definition
pub mod model;

/// Training loop and the word2vec entry points
pub mod trainer;

/// Trained embeddings and similarity queries
pub mod embeddings;
