// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The vocabulary of the system: what a document is, what it
// means to produce sentences for a slice, and how progress is
// reported while that happens.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO directory walking or file parsing
//   - Only plain Rust structs, enums, and traits
//
// Concrete corpora and documents live in Layer 4 (data),
// the embedding trainer lives in Layer 5 (ml).

// Which document model a corpus is read with
pub mod document;

// Progress sinks for long-running extraction
pub mod progress;

// Core abstractions (traits) that other layers implement
pub mod traits;
