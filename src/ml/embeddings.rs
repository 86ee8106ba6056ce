// ============================================================
// Layer 5 — Word2VecModel
// ============================================================
// The result of training: a vocabulary and one dense vector
// per vocabulary word, stored row-major in a single Vec<f32>.
//
// Invariant: vectors.len() == vocabulary.len() * vector_size.
// It is checked on construction and again after loading from
// disk, so lookups can slice rows without bounds surprises.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::train_use_case::Word2VecConfig;
use crate::data::vocabulary::Vocabulary;
use crate::domain::traits::Persistable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word2VecModel {
    vocabulary:  Vocabulary,
    vector_size: usize,
    vectors:     Vec<f32>,
    config:      Word2VecConfig,
}

impl Word2VecModel {
    pub fn new(vocabulary: Vocabulary, vectors: Vec<f32>, config: Word2VecConfig) -> Result<Self> {
        let model = Self {
            vocabulary,
            vector_size: config.vector_size,
            vectors,
            config,
        };
        model.check_shape()?;
        Ok(model)
    }

    /// A model whose vectors were never trained: all zeros.
    ///
    /// Used when a slice has no token above `min_count` (empty
    /// vocabulary) or no word has a neighbour to learn from.
    pub fn untrained(vocabulary: Vocabulary, config: Word2VecConfig) -> Self {
        let vectors = vec![0.0; vocabulary.len() * config.vector_size];
        Self {
            vocabulary,
            vector_size: config.vector_size,
            vectors,
            config,
        }
    }

    fn check_shape(&self) -> Result<()> {
        ensure!(
            self.vectors.len() == self.vocabulary.len() * self.vector_size,
            "Model has {} values for {} words of size {}",
            self.vectors.len(),
            self.vocabulary.len(),
            self.vector_size
        );
        Ok(())
    }

    /// Number of words with a vector
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Hyperparameters the model was trained with
    pub fn config(&self) -> &Word2VecConfig {
        &self.config
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.id(word).is_some()
    }

    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vocabulary.id(word).map(|id| self.row(id))
    }

    fn row(&self, id: usize) -> &[f32] {
        &self.vectors[id * self.vector_size..(id + 1) * self.vector_size]
    }

    /// Cosine similarity of two words; None if either is unknown.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        Some(cosine(self.vector(a)?, self.vector(b)?))
    }

    /// The `topn` words closest to `word` by cosine similarity,
    /// best first, excluding `word` itself. None if `word` is unknown.
    pub fn most_similar(&self, word: &str, topn: usize) -> Option<Vec<(String, f32)>> {
        let id    = self.vocabulary.id(word)?;
        let query = self.row(id);

        let mut scored: Vec<(usize, f32)> = (0..self.len())
            .filter(|&other| other != id)
            .map(|other| (other, cosine(query, self.row(other))))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(topn);

        Some(
            scored
                .into_iter()
                .filter_map(|(other, score)| {
                    self.vocabulary.word(other).map(|w| (w.to_string(), score))
                })
                .collect(),
        )
    }
}

/// Cosine similarity; zero vectors are similar to nothing.
fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32    = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

impl Persistable for Word2VecModel {
    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write model to '{}'", path.display()))?;

        tracing::debug!("Saved {} word vectors to '{}'", self.len(), path.display());
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read model from '{}'", path.display()))?;

        let model: Self = serde_json::from_str(&json)
            .with_context(|| format!("Malformed model file '{}'", path.display()))?;
        model.check_shape()?;
        Ok(model)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn small_model() -> Word2VecModel {
        let sentences = vec![vec![
            "king".to_string(),
            "queen".to_string(),
            "apple".to_string(),
        ]];
        let vocab  = Vocabulary::build(&sentences, 1);
        let config = Word2VecConfig { vector_size: 2, ..Word2VecConfig::default() };

        // Ids are alphabetical here (all counts equal): apple, king, queen
        let vectors = vec![
            0.0, 1.0, // apple
            1.0, 0.1, // king
            0.9, 0.2, // queen
        ];
        Word2VecModel::new(vocab, vectors, config).unwrap()
    }

    #[test]
    fn test_rejects_wrong_vector_count() {
        let vocab = Vocabulary::build(&[vec!["a".to_string()]], 1);
        let config = Word2VecConfig { vector_size: 3, ..Word2VecConfig::default() };
        assert!(Word2VecModel::new(vocab, vec![0.0; 2], config).is_err());
    }

    #[test]
    fn test_vector_lookup() {
        let model = small_model();
        assert_eq!(model.vector("king"), Some(&[1.0, 0.1][..]));
        assert!(model.vector("emperor").is_none());
        assert!(model.contains("queen"));
    }

    #[test]
    fn test_most_similar_excludes_query_and_ranks() {
        let model   = small_model();
        let similar = model.most_similar("king", 5).unwrap();

        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].0, "queen");
        assert_eq!(similar[1].0, "apple");
        assert!(similar[0].1 > similar[1].1);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let model = small_model();
        let ab    = model.similarity("king", "queen").unwrap();
        let ba    = model.similarity("queen", "king").unwrap();
        assert!((ab - ba).abs() < 1e-6);
        assert!(model.similarity("king", "emperor").is_none());
    }

    #[test]
    fn test_untrained_vectors_are_zero() {
        let vocab  = Vocabulary::build(&[vec!["a".to_string(), "b".to_string()]], 1);
        let model  = Word2VecModel::untrained(vocab, Word2VecConfig::default());
        assert_eq!(model.vector("a").unwrap().len(), 100);
        assert_eq!(model.similarity("a", "b"), Some(0.0));
    }

    #[test]
    fn test_save_and_load() {
        let dir   = TempDir::new().unwrap();
        let path  = dir.path().join("model.json");
        let model = small_model();

        model.save(&path).unwrap();
        let loaded = Word2VecModel::load(&path).unwrap();

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.vector("queen"), model.vector("queen"));
        assert_eq!(loaded.config(), model.config());
    }
}
