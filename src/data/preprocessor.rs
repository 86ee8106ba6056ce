// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw document text before sentence splitting, and
// turns sentences into the lowercase tokens the embedding
// trainer consumes.
//
// Historical sources are messy:
//   - OCR output carries non-breaking spaces, stray control
//     characters and hard line wraps
//   - Windows line endings (\r\n) from older transcriptions
//   - Words hyphenated across line breaks ("exam-\nple")
//   - Runs of blank lines between columns or pages
//
// Cleaning steps (applied in order):
//   1. Normalise line endings and odd whitespace characters
//   2. Collapse runs of spaces and trim each line
//   3. Keep at most one blank line between paragraphs
//
// Reflowing and de-hyphenation are separate calls because
// only some document models want them.
//
// Reference: Rust Book §8 (Strings in Rust)
//            unicode-segmentation crate documentation

use unicode_segmentation::UnicodeSegmentation;

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text string for downstream sentence splitting.
    pub fn clean(&self, text: &str) -> String {
        let normalised = normalise_chars(text);

        let lines: Vec<String> = normalised
            .lines()
            .map(collapse_spaces)
            .collect();

        limit_blank_lines(&lines.join("\n"))
    }

    /// Join words split by a hyphen at the end of a line.
    ///
    /// Only rejoins when the hyphen follows a letter and the next
    /// line starts with a lowercase letter, so dashes used as
    /// punctuation and hyphenated proper names survive.
    /// Expects cleaned text (lines already trimmed).
    pub fn join_hyphenated(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut lines = text.split('\n').peekable();

        while let Some(line) = lines.next() {
            let next_starts_lower = lines
                .peek()
                .and_then(|next| next.chars().next())
                .map(|c| c.is_lowercase())
                .unwrap_or(false);

            let stem = line.strip_suffix('-');
            let letter_before_hyphen = stem
                .and_then(|s| s.chars().last())
                .map(|c| c.is_alphabetic())
                .unwrap_or(false);

            match stem {
                Some(stem) if letter_before_hyphen && next_starts_lower => {
                    // Glue the stem straight onto the next line
                    out.push_str(stem);
                }
                _ => {
                    out.push_str(line);
                    if lines.peek().is_some() {
                        out.push('\n');
                    }
                }
            }
        }

        out
    }

    /// Split cleaned text into paragraphs, joining the hard-wrapped
    /// lines inside each paragraph with single spaces.
    ///
    /// Paragraphs are separated by blank lines. Empty paragraphs
    /// are dropped.
    pub fn paragraphs(&self, text: &str) -> Vec<String> {
        text.split("\n\n")
            .map(|block| block.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|para| !para.is_empty())
            .collect()
    }

    /// Lowercase word tokens of a sentence, punctuation dropped.
    ///
    /// Uses Unicode word boundaries, so "didn't" stays one token
    /// and "1848." becomes "1848".
    pub fn tokens(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .map(|w| w.to_lowercase())
            .collect()
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Cleaning Steps ───────────────────────────────────────────────────────────

/// Map problematic characters to plain spaces / newlines.
fn normalise_chars(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            // Old Mac line endings
            '\r' => '\n',
            // Form feeds mark page breaks in OCR dumps
            '\u{000C}' => '\n',
            c if c.is_control() && c != '\n' => ' ',
            c => c,
        })
        .collect()
}

/// Collapse consecutive spaces to one and trim the line.
fn collapse_spaces(line: &str) -> String {
    let mut out        = String::with_capacity(line.len());
    let mut last_space = false;

    for c in line.chars() {
        if c == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }

    out.trim().to_string()
}

/// Allow at most two consecutive newlines (one blank line).
fn limit_blank_lines(text: &str) -> String {
    let mut result        = String::with_capacity(text.len());
    let mut newline_count = 0usize;

    for c in text.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(c);
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    result.trim().to_string()
}
