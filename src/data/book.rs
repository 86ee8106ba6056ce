// ============================================================
// Layer 4 — Book Document
// ============================================================
// One plain-text book per file. Many come from Project
// Gutenberg and carry a licence header and footer that would
// otherwise dominate the vocabulary of small slices:
//
//   ...licence text...
//   *** START OF THE PROJECT GUTENBERG EBOOK MIDDLEMARCH ***
//   <the book>
//   *** END OF THE PROJECT GUTENBERG EBOOK MIDDLEMARCH ***
//   ...licence text...
//
// Only the text between the markers is kept. Books without the
// markers are used whole.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{preprocessor::Preprocessor, sentences::ParagraphSentences};
use crate::domain::traits::Document;

const START_MARKER: &str = "*** START OF";
const END_MARKER: &str = "*** END OF";

/// A parsed book.
#[derive(Debug, Clone)]
pub struct Book {
    source:     PathBuf,
    paragraphs: Vec<String>,
}

impl Book {
    /// Parse book text that has already been read into memory.
    pub fn parse(source: impl Into<PathBuf>, raw: &str) -> Self {
        let prep       = Preprocessor::new();
        let body       = strip_boilerplate(raw);
        let paragraphs = prep.paragraphs(&prep.clean(body));

        Self { source: source.into(), paragraphs }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }
}

impl Document for Book {
    type Sentences = ParagraphSentences;

    fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read book '{}'", path.display()))?;

        let book = Self::parse(path, &raw);
        tracing::debug!(
            "Parsed book: {} ({} paragraphs)",
            path.display(),
            book.paragraphs.len()
        );
        Ok(book)
    }

    fn sentences(self) -> ParagraphSentences {
        ParagraphSentences::new(self.paragraphs)
    }
}

/// The text between the Gutenberg start and end marker lines.
fn strip_boilerplate(raw: &str) -> &str {
    let start = raw
        .find(START_MARKER)
        .map(|at| {
            raw[at..]
                .find('\n')
                .map(|eol| at + eol + 1)
                .unwrap_or(raw.len())
        })
        .unwrap_or(0);

    let end = raw[start..]
        .find(END_MARKER)
        .map(|at| start + at)
        .unwrap_or(raw.len());

    &raw[start..end]
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GUTENBERG: &str = "The Project Gutenberg eBook of Sample\n\
        Licence terms apply.\n\
        *** START OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\
        \n\
        CHAPTER I.\n\
        \n\
        Miss Brooke had that kind of beauty\n\
        which seems to be thrown into relief. She was admired.\n\
        \n\
        *** END OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\
        More licence terms.\n";

    #[test]
    fn test_strips_gutenberg_header_and_footer() {
        let book = Book::parse("sample.txt", GUTENBERG);
        assert_eq!(
            book.paragraphs(),
            &[
                "CHAPTER I.".to_string(),
                "Miss Brooke had that kind of beauty which seems to be thrown into relief. \
                 She was admired."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_sentences_skip_boilerplate() {
        let sentences: Vec<String> = Book::parse("sample.txt", GUTENBERG).sentences().collect();
        assert_eq!(sentences.len(), 3);
        assert!(sentences.iter().all(|s| !s.contains("Licence")));
        assert_eq!(sentences[2], "She was admired.");
    }

    #[test]
    fn test_book_without_markers_is_used_whole() {
        let book = Book::parse("plain.txt", "It was a dark night.\n\nThe end.");
        assert_eq!(book.paragraphs().len(), 2);
    }

    #[test]
    fn test_hyphens_are_left_alone() {
        // Books are not OCR output; line-end hyphens are real
        let book = Book::parse("plain.txt", "a well-\nknown fact");
        assert_eq!(book.paragraphs(), &["a well- known fact".to_string()]);
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, GUTENBERG).unwrap();

        let book = Book::from_path(&path).unwrap();
        assert_eq!(book.source(), path.as_path());
        assert_eq!(book.sentences().count(), 3);
    }
}
