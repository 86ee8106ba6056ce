// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each.
//
// Rules for this layer:
//   - No tensors or vector math here (Layer 5); a use case
//     may only pick the backend it hands to the trainer
//   - No printing here (that's Layer 1)
//   - No direct file access (Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Listing slices, paths and sentences of a corpus
pub mod inspect_use_case;

// Training word2vec on a slice
pub mod train_use_case;

// Nearest-neighbour queries against a saved model
pub mod similar_use_case;
