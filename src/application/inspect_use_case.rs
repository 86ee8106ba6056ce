// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Read-only views of a corpus for the `slices`, `paths` and
// `sentences` commands. Useful for checking a corpus layout
// before committing to a long training run.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::corpus::{sentence_source, Corpus};
use crate::domain::{document::DocumentKind, traits::SentenceSource};

pub struct InspectUseCase {
    root: PathBuf,
}

impl InspectUseCase {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Slice names, sorted for stable display.
    pub fn slices(&self) -> Result<Vec<String>> {
        let mut names = Corpus::new(&self.root).slice_names()?;
        names.sort();
        Ok(names)
    }

    /// Every file in a slice, in scan order.
    pub fn paths(&self, slice: &str) -> Result<Vec<PathBuf>> {
        let paths = Corpus::new(&self.root)
            .slice_paths(slice)?
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(paths)
    }

    /// The first `limit` sentences of a slice (all of them if None).
    ///
    /// Stops reading documents as soon as the limit is reached.
    pub fn sentences(&self, kind: DocumentKind, slice: &str, limit: Option<usize>) -> Result<Vec<String>> {
        let source = sentence_source(kind, &self.root);
        let stream = source.sentences(slice)?;

        match limit {
            Some(n) => stream.take(n).collect(),
            None    => stream.collect(),
        }
    }
}
