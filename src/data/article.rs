// ============================================================
// Layer 4 — BPO Article Document
// ============================================================
// One OCR'd periodical article per file, as exported from the
// British Periodicals Online collection: plain UTF-8 text,
// hard-wrapped at the column width of the original page, with
// words hyphenated across line ends.
//
// Parsing:
//   raw text → clean → rejoin hyphenated words → paragraphs
//
// Sentences are produced lazily from the stored paragraphs.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{preprocessor::Preprocessor, sentences::ParagraphSentences};
use crate::domain::traits::Document;

/// A parsed periodical article.
#[derive(Debug, Clone)]
pub struct BpoArticle {
    /// Where the article was read from, kept for traceability
    source: PathBuf,

    /// Cleaned paragraphs, hard wraps already undone
    paragraphs: Vec<String>,
}

impl BpoArticle {
    /// Parse article text that has already been read into memory.
    pub fn parse(source: impl Into<PathBuf>, raw: &str) -> Self {
        let prep       = Preprocessor::new();
        let cleaned    = prep.clean(raw);
        let joined     = prep.join_hyphenated(&cleaned);
        let paragraphs = prep.paragraphs(&joined);

        Self { source: source.into(), paragraphs }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }
}

impl Document for BpoArticle {
    type Sentences = ParagraphSentences;

    fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read article '{}'", path.display()))?;

        let article = Self::parse(path, &raw);
        tracing::debug!(
            "Parsed article: {} ({} paragraphs)",
            path.display(),
            article.paragraphs.len()
        );
        Ok(article)
    }

    fn sentences(self) -> ParagraphSentences {
        ParagraphSentences::new(self.paragraphs)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::TempDir;

    const OCR_SAMPLE: &str = "THE CORN LAWS.\n\
        The debate in the House con-\n\
        tinued late into the night. Mem-\n\
        bers  were   weary.\n\
        \n\n\n\
        A second para-\n\
        graph follows.\n";

    #[test]
    fn test_parse_rejoins_wrapped_lines_and_hyphens() {
        let article = BpoArticle::parse("sample.txt", OCR_SAMPLE);
        assert_eq!(
            article.paragraphs(),
            &[
                "THE CORN LAWS. The debate in the House continued late into the night. \
                 Members were weary."
                    .to_string(),
                "A second paragraph follows.".to_string(),
            ]
        );
    }

    #[test]
    fn test_sentences_in_reading_order() {
        let sentences: Vec<String> = BpoArticle::parse("sample.txt", OCR_SAMPLE)
            .sentences()
            .collect();
        assert_eq!(
            sentences,
            vec![
                "THE CORN LAWS.",
                "The debate in the House continued late into the night.",
                "Members were weary.",
                "A second paragraph follows.",
            ]
        );
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "Short piece. Two sentences.").unwrap();

        let article = BpoArticle::from_path(&path).unwrap();
        assert_eq!(article.source(), path.as_path());
        assert_eq!(article.sentences().count(), 2);
    }

    #[test]
    fn test_from_path_missing_file_keeps_io_error() {
        let dir = TempDir::new().unwrap();
        let err = BpoArticle::from_path(&dir.path().join("gone.txt")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<io::Error>().unwrap().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
        assert!(BpoArticle::from_path(&path).is_err());
    }
}
