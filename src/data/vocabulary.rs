// ============================================================
// Layer 4 — Vocabulary
// ============================================================
// Maps tokens to dense integer ids for the embedding tables.
//
// Built from the tokenised sentences of a slice:
//   1. Count every token
//   2. Drop tokens seen fewer than `min_count` times
//   3. Sort by descending count (ties alphabetically, so two
//      builds over the same slice give the same ids)
//
// Frequent words therefore get small ids, and the counts are
// kept for the negative-sampling noise distribution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exponent applied to counts for the negative-sampling distribution.
const NOISE_EXPONENT: f64 = 0.75;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "VocabularyRecord", into = "VocabularyRecord")]
pub struct Vocabulary {
    words:  Vec<String>,
    counts: Vec<u64>,
    index:  HashMap<String, usize>,
}

/// On-disk form: the id → (word, count) table only.
#[derive(Serialize, Deserialize)]
struct VocabularyRecord {
    entries: Vec<(String, u64)>,
}

impl Vocabulary {
    /// Build a vocabulary from tokenised sentences.
    pub fn build(sentences: &[Vec<String>], min_count: usize) -> Self {
        let mut freq: HashMap<&str, u64> = HashMap::new();
        for token in sentences.iter().flatten() {
            *freq.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut entries: Vec<(&str, u64)> = freq
            .into_iter()
            .filter(|&(_, count)| count >= min_count as u64)
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        Self::from_entries(
            entries
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        )
    }

    fn from_entries(entries: Vec<(String, u64)>) -> Self {
        let mut words  = Vec::with_capacity(entries.len());
        let mut counts = Vec::with_capacity(entries.len());
        let mut index  = HashMap::with_capacity(entries.len());

        for (id, (word, count)) in entries.into_iter().enumerate() {
            index.insert(word.clone(), id);
            words.push(word);
            counts.push(count);
        }

        Self { words, counts, index }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn id(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn word(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    pub fn count(&self, id: usize) -> Option<u64> {
        self.counts.get(id).copied()
    }

    /// Words in id order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Ids of the in-vocabulary tokens of a sentence; unknown tokens are skipped.
    pub fn encode(&self, tokens: &[String]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|t| self.id(t))
            .map(|id| id as u32)
            .collect()
    }

    /// Unnormalised sampling weight per id: count^0.75.
    pub fn noise_weights(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| (c as f64).powf(NOISE_EXPONENT))
            .collect()
    }
}

impl From<VocabularyRecord> for Vocabulary {
    fn from(record: VocabularyRecord) -> Self {
        Self::from_entries(record.entries)
    }
}

impl From<Vocabulary> for VocabularyRecord {
    fn from(vocab: Vocabulary) -> Self {
        Self {
            entries: vocab.words.into_iter().zip(vocab.counts).collect(),
        }
    }
}
