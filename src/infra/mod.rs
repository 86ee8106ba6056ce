// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one layer:
//
//   model_store.rs — Output directory of a training run.
//                    Saves and loads the trained model and the
//                    Word2VecConfig it was trained with, and
//                    hands out the metrics logger.
//
//   metrics.rs     — Per-epoch loss history written to CSV for
//                    later analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model and config persistence
pub mod model_store;

/// Training metrics CSV logger
pub mod metrics;
