// ============================================================
// Layer 6 — Model Store
// ============================================================
// One directory per training run:
//
//   out_dir/
//     model.json         ← vocabulary + vectors (Word2VecModel)
//     train_config.json  ← hyperparameters used for the run
//     metrics.csv        ← loss per epoch
//
// The config is written before training starts, the model
// after it finishes, so a directory with a config but no model
// is a run that did not complete.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::train_use_case::Word2VecConfig;
use crate::domain::traits::Persistable;
use crate::infra::metrics::MetricsLogger;
use crate::ml::embeddings::Word2VecModel;

const MODEL_FILE: &str = "model.json";
const CONFIG_FILE: &str = "train_config.json";

pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    /// Store for a new run. Creates the directory (like `mkdir -p`)
    /// and starts a fresh metrics.csv, so a rerun into the same
    /// directory never mixes its epochs with an older run's.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        MetricsLogger::create(&dir)?;
        Ok(Self { dir })
    }

    /// Store for reading an existing run. Nothing is touched on disk.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_model(&self, model: &Word2VecModel) -> Result<()> {
        model.save(&self.dir.join(MODEL_FILE))
    }

    pub fn load_model(&self) -> Result<Word2VecModel> {
        let path = self.dir.join(MODEL_FILE);
        Word2VecModel::load(&path).with_context(|| {
            format!(
                "No usable model in '{}'. Have you run 'train' first?",
                self.dir.display()
            )
        })
    }

    pub fn save_config(&self, cfg: &Word2VecConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<Word2VecConfig> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn metrics_logger(&self) -> Result<MetricsLogger> {
        MetricsLogger::new(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::infra::metrics::EpochMetrics;

    #[test]
    fn test_create_makes_nested_dirs() {
        let tmp   = TempDir::new().unwrap();
        let store = ModelStore::create(tmp.path().join("a/b/c")).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_create_resets_metrics_of_earlier_run() {
        let tmp = TempDir::new().unwrap();
        for _ in 0..2 {
            ModelStore::create(tmp.path())
                .unwrap()
                .metrics_logger()
                .unwrap()
                .log(&EpochMetrics::new(1, 1.0, 1))
                .unwrap();
        }

        let csv = fs::read_to_string(tmp.path().join("metrics.csv")).unwrap();
        assert_eq!(csv, "epoch,loss,batches\n1,1.000000,1\n");
    }

    #[test]
    fn test_config_round_trip() {
        let tmp   = TempDir::new().unwrap();
        let store = ModelStore::create(tmp.path()).unwrap();
        let cfg   = Word2VecConfig { epochs: 3, ..Word2VecConfig::default() };

        store.save_config(&cfg).unwrap();
        assert_eq!(store.load_config().unwrap(), cfg);
    }

    #[test]
    fn test_load_model_without_training_explains() {
        let tmp = TempDir::new().unwrap();
        let err = ModelStore::open(tmp.path()).load_model().unwrap_err();
        assert!(format!("{err:#}").contains("Have you run 'train' first?"));
    }
}
