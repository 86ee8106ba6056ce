// ============================================================
// Layer 4 — Corpus and Slices
// ============================================================
// A corpus is a root directory whose immediate sub-directories
// are "slices" (a decade, a periodical, a publisher...):
//
//   corpus_root/
//     1840s/
//       vol_01/article_0001.txt
//       vol_01/article_0002.txt
//     1850s/
//       ...
//
// Corpus       — lists slices and the files inside them
// SliceCorpus  — adds a document model D and streams the
//                sentences of every file in a slice
//
// BpoCorpus and BookCorpus are SliceCorpus with the article
// and book document models plugged in.
//
// Reference: Rust Book §10 (Generic Types)
//            Rust Book §13 (Iterators)

use anyhow::Result;
use std::{
    fs,
    iter::Enumerate,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use crate::data::{
    article::BpoArticle,
    book::Book,
    scanner::{scan_paths, ScanPaths},
};
use crate::domain::{
    document::DocumentKind,
    progress::LogProgress,
    traits::{Document, ProgressSink, SentenceSource, SliceSentenceStream},
};

/// Progress is reported for document indices 0, 100, 200, ...
pub const PROGRESS_INTERVAL: usize = 100;

// ─── Corpus ───────────────────────────────────────────────────────────────────
/// A corpus root directory. Holds no state beyond the path.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the immediate sub-directories of the root.
    ///
    /// Order is whatever the filesystem returns. Plain files at
    /// the root are ignored; symlinks to directories count.
    pub fn slice_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        tracing::debug!("Found {} slices under '{}'", names.len(), self.root.display());
        Ok(names)
    }

    /// Every file under `root/slice_name`, recursively, in a lazy scan.
    ///
    /// A missing or unreadable slice directory fails here with the
    /// filesystem's own `io::Error`.
    pub fn slice_paths(&self, slice_name: &str) -> Result<ScanPaths> {
        let slice_path = self.root.join(slice_name);

        fs::read_dir(&slice_path)?;

        Ok(scan_paths(slice_path))
    }
}

// ─── SliceCorpus ──────────────────────────────────────────────────────────────
/// A corpus whose files are all parsed with document model `D`.
pub struct SliceCorpus<D> {
    corpus:   Corpus,
    progress: Box<dyn ProgressSink>,
    document: PhantomData<fn() -> D>,
}

/// Corpus of OCR'd periodical articles.
pub type BpoCorpus = SliceCorpus<BpoArticle>;

/// Corpus of plain-text books.
pub type BookCorpus = SliceCorpus<Book>;

impl<D: Document> SliceCorpus<D> {
    /// Corpus at `root` that logs progress through tracing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_progress(root, LogProgress)
    }

    /// Corpus at `root` that reports progress to a custom sink.
    pub fn with_progress(root: impl Into<PathBuf>, progress: impl ProgressSink + 'static) -> Self {
        Self {
            corpus:   Corpus::new(root),
            progress: Box::new(progress),
            document: PhantomData,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn slice_names(&self) -> Result<Vec<String>> {
        self.corpus.slice_names()
    }

    pub fn slice_paths(&self, slice_name: &str) -> Result<ScanPaths> {
        self.corpus.slice_paths(slice_name)
    }

    /// Concrete-typed sentence stream for a slice.
    pub fn slice_sentences(&self, slice_name: &str) -> Result<SliceSentences<'_, D>> {
        let paths = self.corpus.slice_paths(slice_name)?;
        tracing::debug!("Streaming sentences for slice '{}'", slice_name);

        Ok(SliceSentences {
            paths:    paths.enumerate(),
            current:  None,
            progress: self.progress.as_ref(),
            finished: false,
        })
    }
}

impl<D> SentenceSource for SliceCorpus<D>
where
    D: Document + 'static,
{
    fn sentences<'a>(&'a self, slice_name: &str) -> Result<SliceSentenceStream<'a>> {
        Ok(Box::new(self.slice_sentences(slice_name)?))
    }
}

/// Open `root` with the document model for `kind`.
pub fn sentence_source(kind: DocumentKind, root: impl Into<PathBuf>) -> Box<dyn SentenceSource> {
    match kind {
        DocumentKind::Article => Box::new(BpoCorpus::new(root)),
        DocumentKind::Book    => Box::new(BookCorpus::new(root)),
    }
}

// ─── SliceSentences ───────────────────────────────────────────────────────────
/// A document that is being read, with its position in the slice.
struct OpenDocument<S> {
    index:     usize,
    path:      PathBuf,
    sentences: S,
}

/// Pull-based stream of sentences across every document in a slice.
///
/// Documents are opened one at a time, in scan order, and dropped
/// as soon as their sentences run out. The first error (scan or
/// parse) is yielded once and the stream then ends.
pub struct SliceSentences<'a, D: Document> {
    paths:    Enumerate<ScanPaths>,
    current:  Option<OpenDocument<D::Sentences>>,
    progress: &'a dyn ProgressSink,
    finished: bool,
}

impl<D: Document> SliceSentences<'_, D> {
    fn fail(&mut self, err: anyhow::Error) -> Option<Result<String>> {
        self.finished = true;
        self.current  = None;
        Some(Err(err))
    }
}

impl<D: Document> Iterator for SliceSentences<'_, D> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if let Some(open) = self.current.as_mut() {
                if let Some(sentence) = open.sentences.next() {
                    return Some(Ok(sentence));
                }
                // Document exhausted
                if open.index % PROGRESS_INTERVAL == 0 {
                    self.progress.document_processed(open.index, &open.path);
                }
                self.current = None;
            }

            let (index, path) = match self.paths.next() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some((_, Err(e)))        => return self.fail(e.into()),
                Some((index, Ok(path)))  => (index, path),
            };

            match D::from_path(&path) {
                Ok(document) => {
                    self.current = Some(OpenDocument {
                        index,
                        path,
                        sentences: document.sentences(),
                    });
                }
                Err(e) => return self.fail(e),
            }
        }
    }
}
