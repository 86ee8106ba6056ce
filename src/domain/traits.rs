// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two capabilities sit at the centre of the crate:
//
//   Document       — "given a path, produce sentences"
//                    implemented by BpoArticle and Book
//
//   SentenceSource — "given a slice name, produce sentences"
//                    implemented by SliceCorpus<D> for any D
//
// A bare Corpus (root directory + slice listing) deliberately
// does NOT implement SentenceSource: asking it for sentences
// is a compile error rather than a runtime failure.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §13 (Iterators)

use anyhow::Result;
use std::path::Path;

// ─── Document ─────────────────────────────────────────────────────────────────
/// A single source file parsed into a lazy sequence of sentences.
///
/// Implementations:
///   - BpoArticle → OCR'd periodical article
///   - Book       → plain-text book, Gutenberg boilerplate removed
pub trait Document: Sized {
    /// Owned, pull-based sentence iterator. Consumed exactly once.
    type Sentences: Iterator<Item = String>;

    /// Read and parse the file at `path`.
    fn from_path(path: &Path) -> Result<Self>;

    /// Hand over the document's sentences in reading order.
    fn sentences(self) -> Self::Sentences;
}

// ─── SentenceSource ───────────────────────────────────────────────────────────
/// Boxed, fallible sentence stream for one slice.
///
/// The stream yields the first error it meets and then ends.
pub type SliceSentenceStream<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Anything that can stream the sentences of a named slice.
pub trait SentenceSource {
    /// Start a fresh, single-pass sentence stream for `slice_name`.
    ///
    /// A missing slice directory is reported here, before the
    /// stream is returned.
    fn sentences<'a>(&'a self, slice_name: &str) -> Result<SliceSentenceStream<'a>>;
}

// ─── ProgressSink ─────────────────────────────────────────────────────────────
/// Receives a notification every `PROGRESS_INTERVAL` documents.
///
/// Any `Fn(usize, &Path)` closure is a sink, which keeps tests
/// and ad-hoc callers free of boilerplate.
pub trait ProgressSink {
    /// Called once the document at `index` has been fully read.
    fn document_processed(&self, index: usize, path: &Path);
}

impl<F> ProgressSink for F
where
    F: Fn(usize, &Path),
{
    fn document_processed(&self, index: usize, path: &Path) {
        self(index, path)
    }
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - Word2VecModel → vocabulary + vectors as JSON
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path.
    fn load(path: &Path) -> Result<Self>;
}
