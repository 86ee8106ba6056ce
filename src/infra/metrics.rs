// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records the average training loss of each epoch to a CSV
// file next to the model.
//
// Example CSV output:
//   epoch,loss,batches
//   1,4.158883,312
//   2,3.020417,312
//
// The loss is the negative-sampling loss per pair, so it starts
// near (1 + negative) * ln 2 and should fall every epoch. A
// flat curve usually means the learning rate is too low or the
// slice is too small for the chosen min_count.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Average negative-sampling loss over the epoch's batches
    pub loss: f64,

    /// Number of batches the average was taken over
    pub batches: usize,
}

impl EpochMetrics {
    pub fn new(epoch: usize, loss: f64, batches: usize) -> Self {
        Self { epoch, loss, batches }
    }

    /// Returns true if this epoch beat the best loss so far
    pub fn is_improvement(&self, best_loss: f64) -> bool {
        self.loss < best_loss
    }
}

/// Appends epoch metrics to `metrics.csv`.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Starts an empty `metrics.csv` for a new run, discarding
    /// rows left by an earlier run in the same directory.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join("metrics.csv");
        let mut f = fs::File::create(&csv_path)?;
        writeln!(f, "epoch,loss,batches")?;
        tracing::debug!("Reset metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Opens `metrics.csv` for appending, writing the header only
    /// if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join("metrics.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "epoch,loss,batches")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(f, "{},{:.6},{}", m.epoch, m.loss, m.batches)?;

        tracing::debug!("Logged epoch {} metrics: loss={:.4}", m.epoch, m.loss);
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_improvement() {
        let m = EpochMetrics::new(2, 2.3, 10);
        assert!(m.is_improvement(3.0));
        assert!(!m.is_improvement(2.0));
    }

    #[test]
    fn test_create_discards_previous_rows() {
        let dir = TempDir::new().unwrap();
        MetricsLogger::new(dir.path()).unwrap()
            .log(&EpochMetrics::new(1, 9.0, 2)).unwrap();

        let logger = MetricsLogger::create(dir.path()).unwrap();
        logger.log(&EpochMetrics::new(1, 1.0, 1)).unwrap();

        let csv = fs::read_to_string(logger.csv_path()).unwrap();
        assert_eq!(csv, "epoch,loss,batches\n1,1.000000,1\n");
    }

    #[test]
    fn test_appends_rows_under_one_header() {
        let dir    = TempDir::new().unwrap();
        let logger = MetricsLogger::new(dir.path()).unwrap();
        logger.log(&EpochMetrics::new(1, 4.5, 3)).unwrap();

        // A second logger on the same directory must not rewrite the header
        let again = MetricsLogger::new(dir.path()).unwrap();
        again.log(&EpochMetrics::new(2, 3.25, 3)).unwrap();

        let csv = fs::read_to_string(logger.csv_path()).unwrap();
        assert_eq!(csv, "epoch,loss,batches\n1,4.500000,3\n2,3.250000,3\n");
    }
}
