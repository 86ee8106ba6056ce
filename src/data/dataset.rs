use anyhow::{Context, Result};
use burn::data::dataset::Dataset;
use rand::{distributions::WeightedIndex, prelude::*, rngs::StdRng};

/// One (center, context) pair plus its negative samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipGramSample {
    pub center:    u32,
    pub context:   u32,
    pub negatives: Vec<u32>,
}

/// Skip-gram training pairs for a slice.
///
/// Pairs are materialised up front; negatives are drawn on
/// `get` from an RNG seeded by (seed, index), so a sample is the
/// same every time it is fetched and no negatives are stored.
pub struct SkipGramDataset {
    pairs:    Vec<(u32, u32)>,
    noise:    WeightedIndex<f64>,
    negative: usize,
    seed:     u64,
}

impl SkipGramDataset {
    /// Every (center, context) pair within `window` positions.
    ///
    /// `sentences` are vocabulary ids with unknown tokens already
    /// removed; `noise_weights` has one weight per vocabulary id.
    pub fn build(
        sentences:     &[Vec<u32>],
        noise_weights: &[f64],
        window:        usize,
        negative:      usize,
        seed:          u64,
    ) -> Result<Self> {
        let noise = WeightedIndex::new(noise_weights)
            .context("Cannot build negative-sampling distribution")?;

        let mut pairs = Vec::new();
        for sentence in sentences {
            for (i, &center) in sentence.iter().enumerate() {
                let lo = i.saturating_sub(window);
                let hi = (i + window + 1).min(sentence.len());
                for (j, &context) in sentence.iter().enumerate().take(hi).skip(lo) {
                    if j != i {
                        pairs.push((center, context));
                    }
                }
            }
        }

        tracing::debug!("Built {} skip-gram pairs (window={})", pairs.len(), window);
        Ok(Self { pairs, noise, negative, seed })
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

impl Dataset<SkipGramSample> for SkipGramDataset {
    fn get(&self, index: usize) -> Option<SkipGramSample> {
        let &(center, context) = self.pairs.get(index)?;

        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));
        let negatives = (0..self.negative)
            .map(|_| self.noise.sample(&mut rng) as u32)
            .collect();

        Some(SkipGramSample { center, context, negatives })
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}
