// ============================================================
// Layer 3 — Progress Sinks
// ============================================================
// Extraction over a large slice can take minutes. Rather than
// printing from inside the iterator, the corpus reports to a
// ProgressSink and the caller decides what to do with it.

use std::path::Path;

use crate::domain::traits::ProgressSink;

/// Default sink: one `info` line per notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn document_processed(&self, index: usize, path: &Path) {
        tracing::info!("Processed document {} ({})", index, path.display());
    }
}

/// Sink that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn document_processed(&self, _index: usize, _path: &Path) {}
}
