// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates one training run for one slice:
//
//   Step 1: Open the corpus with the right document model (Layer 4)
//   Step 2: Collect every sentence of the slice          (Layer 4)
//   Step 3: Prepare the output directory, save config    (Layer 6)
//   Step 4: Train word2vec                               (Layer 5)
//   Step 5: Log per-epoch metrics to CSV                 (Layer 6)
//   Step 6: Save the model                               (Layer 6)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{ensure, Result};
use burn::{backend::wgpu::WgpuDevice, tensor::backend::AutodiffBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::corpus::sentence_source;
use crate::domain::document::DocumentKind;
use crate::infra::model_store::ModelStore;
use crate::ml::trainer::{collect_sentences, TrainBackend, Word2VecTrainer};

// ─── Word2Vec Configuration ──────────────────────────────────────────────────
// Hyperparameters for a training run. Saved next to the model
// as train_config.json so a run can always be traced back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word2VecConfig {
    /// Dimensionality of each word vector
    pub vector_size:   usize,
    /// Words seen fewer times than this are dropped
    pub min_count:     usize,
    /// Data-loader worker threads
    pub workers:       usize,
    /// Max distance between a center word and its context
    pub window:        usize,
    /// Negative samples per positive pair
    pub negative:      usize,
    pub epochs:        usize,
    pub learning_rate: f64,
    pub batch_size:    usize,
    /// Seeds shuffling and negative sampling
    pub seed:          u64,
}

impl Default for Word2VecConfig {
    fn default() -> Self {
        Self {
            vector_size:   100,
            min_count:     10,
            workers:       8,
            window:        5,
            negative:      5,
            epochs:        5,
            learning_rate: 0.025,
            batch_size:    256,
            seed:          1,
        }
    }
}

impl Word2VecConfig {
    /// Reject settings the trainer cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.vector_size > 0, "vector_size must be at least 1");
        ensure!(self.window > 0, "window must be at least 1");
        // The data loader splits the dataset across workers
        ensure!(self.workers > 0, "workers must be at least 1");
        ensure!(self.batch_size > 0, "batch_size must be at least 1");
        ensure!(self.epochs > 0, "epochs must be at least 1");
        ensure!(
            self.learning_rate.is_finite() && self.learning_rate > 0.0,
            "learning_rate must be a positive number, got {}",
            self.learning_rate
        );
        Ok(())
    }
}

// ─── TrainRequest ─────────────────────────────────────────────────────────────
/// What to train on and where to put the result.
#[derive(Debug, Clone)]
pub struct TrainRequest {
    pub root:    PathBuf,
    pub slice:   String,
    pub kind:    DocumentKind,
    pub out_dir: PathBuf,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSummary {
    pub sentences:  usize,
    pub vocabulary: usize,
    pub epochs:     usize,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    request: TrainRequest,
    config:  Word2VecConfig,
}

impl TrainUseCase {
    pub fn new(request: TrainRequest, config: Word2VecConfig) -> Self {
        Self { request, config }
    }

    /// Execute the full training pipeline end to end on the default WGPU device
    pub fn execute(&self) -> Result<TrainSummary> {
        self.execute_on::<TrainBackend>(&WgpuDevice::default())
    }

    /// Same pipeline on any autodiff backend.
    pub fn execute_on<B: AutodiffBackend>(&self, device: &B::Device) -> Result<TrainSummary> {
        let req = &self.request;
        self.config.validate()?;

        // ── Step 1 + 2: Sentences for the slice ──────────────────────────────
        tracing::info!(
            "Reading {} slice '{}' under '{}'",
            req.kind,
            req.slice,
            req.root.display()
        );
        let source    = sentence_source(req.kind, &req.root);
        let sentences = collect_sentences(source.as_ref(), &req.slice)?;

        // ── Step 3: Output directory and config ──────────────────────────────
        // Saved before training so a crashed run still records its settings
        let store = ModelStore::create(&req.out_dir)?;
        store.save_config(&self.config)?;

        // ── Step 4: Train ────────────────────────────────────────────────────
        let outcome = Word2VecTrainer::new(self.config.clone()).train_on::<B>(&sentences, device)?;

        // ── Step 5: Metrics ──────────────────────────────────────────────────
        let logger = store.metrics_logger()?;
        for m in &outcome.metrics {
            logger.log(m)?;
        }

        // ── Step 6: Model ────────────────────────────────────────────────────
        store.save_model(&outcome.model)?;
        tracing::info!(
            "Saved {} word vectors to '{}'",
            outcome.model.len(),
            store.dir().display()
        );

        Ok(TrainSummary {
            sentences:  sentences.len(),
            vocabulary: outcome.model.len(),
            epochs:     outcome.metrics.len(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::ml::embeddings::Word2VecModel;

    #[test]
    fn test_default_matches_fixed_hyperparameters() {
        let cfg = Word2VecConfig::default();
        assert_eq!(cfg.vector_size, 100);
        assert_eq!(cfg.min_count, 10);
        assert_eq!(cfg.workers, 8);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let cfg = Word2VecConfig { window: 0, ..Word2VecConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let cfg = Word2VecConfig { workers: 0, ..Word2VecConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("workers"));
    }

    #[test]
    fn test_sparse_book_slice_saves_empty_model() {
        let root  = TempDir::new().unwrap();
        let out   = TempDir::new().unwrap();
        let slice = root.path().join("victorian");
        fs::create_dir(&slice).unwrap();
        fs::write(slice.join("book.txt"), "A tiny book. With few words.").unwrap();

        let request = TrainRequest {
            root:    root.path().to_path_buf(),
            slice:   "victorian".to_string(),
            kind:    DocumentKind::Book,
            out_dir: out.path().join("model"),
        };
        let summary = TrainUseCase::new(request, Word2VecConfig::default())
            .execute()
            .unwrap();

        assert_eq!(summary, TrainSummary { sentences: 2, vocabulary: 0, epochs: 0 });

        let store = ModelStore::open(out.path().join("model"));
        let model: Word2VecModel = store.load_model().unwrap();
        assert!(model.is_empty());
        assert_eq!(store.load_config().unwrap(), Word2VecConfig::default());
    }

    #[test]
    fn test_rerun_into_same_dir_keeps_one_run_of_metrics() {
        type TestBackend = burn::backend::Autodiff<burn::backend::NdArray>;

        let root  = TempDir::new().unwrap();
        let out   = TempDir::new().unwrap();
        let slice = root.path().join("1853");
        fs::create_dir(&slice).unwrap();
        fs::write(slice.join("a.txt"), "Corn prices rose sharply. ".repeat(10)).unwrap();

        let config = Word2VecConfig {
            vector_size: 4,
            min_count:   1,
            workers:     1,
            epochs:      2,
            batch_size:  8,
            ..Word2VecConfig::default()
        };
        let request = TrainRequest {
            root:    root.path().to_path_buf(),
            slice:   "1853".to_string(),
            kind:    DocumentKind::Article,
            out_dir: out.path().to_path_buf(),
        };
        let use_case = TrainUseCase::new(request, config);

        for _ in 0..2 {
            let summary = use_case.execute_on::<TestBackend>(&Default::default()).unwrap();
            assert_eq!(summary.epochs, 2);
        }

        let csv  = fs::read_to_string(out.path().join("metrics.csv")).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "epoch,loss,batches");
        assert!(rows[1].starts_with("1,"));
        assert!(rows[2].starts_with("2,"));
    }

    #[test]
    fn test_missing_slice_fails_before_writing() {
        let root = TempDir::new().unwrap();
        let out  = TempDir::new().unwrap();

        let request = TrainRequest {
            root:    root.path().to_path_buf(),
            slice:   "absent".to_string(),
            kind:    DocumentKind::Article,
            out_dir: out.path().join("model"),
        };

        assert!(TrainUseCase::new(request, Word2VecConfig::default()).execute().is_err());
        assert!(!out.path().join("model").exists());
    }
}
