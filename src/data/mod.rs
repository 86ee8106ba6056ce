// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a corpus directory to tensor batches.
//
//   corpus root
//       │
//       ▼
//   Corpus / scanner   → slice names, file paths (lazy)
//       │
//       ▼
//   BpoArticle / Book  → parse a file, hand out sentences
//       │
//       ▼
//   SliceCorpus        → one sentence stream per slice
//       │
//       ▼
//   Preprocessor       → lowercase word tokens
//       │
//       ▼
//   Vocabulary         → token ids, counts (min_count applied)
//       │
//       ▼
//   SkipGramDataset    → (center, context, negatives) samples
//       │
//       ▼
//   SkipGramBatcher    → tensors for the training loop
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Corpus root, slices, and the per-slice sentence stream
pub mod corpus;

/// Recursive file discovery with walkdir
pub mod scanner;

/// OCR'd periodical article document model
pub mod article;

/// Plain-text book document model
pub mod book;

/// Text cleaning, reflowing and tokenisation
pub mod preprocessor;

/// Lazy Unicode sentence splitting
pub mod sentences;

/// Token ids and counts
pub mod vocabulary;

/// Implements Burn's Dataset trait for skip-gram samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
