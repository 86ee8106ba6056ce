// ============================================================
// Layer 2 — SimilarUseCase
// ============================================================
// Loads a model saved by `train` and answers nearest-neighbour
// queries against it.

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::infra::model_store::ModelStore;
use crate::ml::embeddings::Word2VecModel;

pub struct SimilarUseCase {
    model: Word2VecModel,
}

impl SimilarUseCase {
    /// Load the model from a directory written by `train`.
    pub fn new(model_dir: impl Into<PathBuf>) -> Result<Self> {
        let model = ModelStore::open(model_dir).load_model()?;
        tracing::info!("Loaded model with {} words", model.len());
        Ok(Self { model })
    }

    pub fn from_model(model: Word2VecModel) -> Self {
        Self { model }
    }

    /// The `topn` nearest words. Unknown words are an error rather
    /// than an empty answer, so typos are not mistaken for results.
    pub fn similar(&self, word: &str, topn: usize) -> Result<Vec<(String, f32)>> {
        let query = word.to_lowercase();
        match self.model.most_similar(&query, topn) {
            Some(neighbours) => Ok(neighbours),
            None => bail!("'{}' is not in the model vocabulary ({} words)", word, self.model.len()),
        }
    }
}
