// ============================================================
// Layer 3 — Document Kind
// ============================================================
// A corpus root can hold either periodical articles or whole
// books. Both are read the same way (path in, sentences out)
// but parsed differently, so the application layer picks the
// document model with this enum instead of a type parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The document model used to read every file in a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// OCR'd periodical articles, one article per file
    Article,

    /// Plain-text books, one book per file
    Book,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Article => write!(f, "article"),
            DocumentKind::Book    => write!(f, "book"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for kind in [DocumentKind::Article, DocumentKind::Book] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
