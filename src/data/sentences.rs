// ============================================================
// Layer 4 — Sentence Splitting
// ============================================================
// Lazy, owned sentence iterators used by the document models.
//
// A document hands its sentences to the corpus by value, so
// the iterator must own the text it walks. Instead of storing
// slices into a String it also owns (self-referential), the
// splitter keeps a byte offset and re-runs the Unicode
// sentence segmenter from that offset on each pull.
//
// Reference: UAX #29 (Unicode Text Segmentation)
//            unicode-segmentation crate documentation

use std::vec;

use unicode_segmentation::UnicodeSegmentation;

/// Sentences of a single paragraph, produced on demand.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    text:   String,
    offset: usize,
}

impl SentenceSplitter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), offset: 0 }
    }
}

impl Iterator for SentenceSplitter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.offset < self.text.len() {
            // offset always sits on a sentence boundary, and UAX #29
            // starts a sentence at the start of text (SB1), so the first
            // bound of the remainder is the next sentence.
            let bound = self.text[self.offset..].split_sentence_bounds().next()?;
            self.offset += bound.len();

            // Bounds made only of punctuation or whitespace are not sentences
            if bound.chars().any(char::is_alphanumeric) {
                return Some(bound.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        }
        None
    }
}

/// Sentences of a list of paragraphs, paragraph by paragraph.
#[derive(Debug)]
pub struct ParagraphSentences {
    paragraphs: vec::IntoIter<String>,
    current:    Option<SentenceSplitter>,
}

impl ParagraphSentences {
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs: paragraphs.into_iter(), current: None }
    }
}

impl Iterator for ParagraphSentences {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(sentence) = self.current.as_mut().and_then(Iterator::next) {
                return Some(sentence);
            }
            self.current = Some(SentenceSplitter::new(self.paragraphs.next()?));
        }
    }
}
