// ============================================================
// Layer 4 — Skip-gram Batcher
// ============================================================
// Implements Burn's Batcher trait to stack SkipGramSamples
// into tensors for the model.
//
// For a batch of N samples with K negatives each:
//   centers  [N, 1]      the center word of each pair
//   targets  [N, 1 + K]  context word, then the negatives
//   labels   [N, 1 + K]  +1 for the context, -1 for negatives
//
// The ±1 labels let the loss be written as a single
// log-sigmoid over (score * label).
//
// Reference: Burn Book §4 (Batcher)
//            Mikolov et al. (2013) Distributed Representations

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};
use std::iter;

use crate::data::dataset::SkipGramSample;

/// A batch of skip-gram samples ready for the forward pass.
#[derive(Debug, Clone)]
pub struct SkipGramBatch<B: Backend> {
    /// Center word ids — shape: [batch_size, 1]
    pub centers: Tensor<B, 2, Int>,

    /// Context id followed by negative ids — shape: [batch_size, 1 + negative]
    pub targets: Tensor<B, 2, Int>,

    /// +1.0 / -1.0 per target — shape: [batch_size, 1 + negative]
    pub labels: Tensor<B, 2>,
}

/// Holds the target device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct SkipGramBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> SkipGramBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<SkipGramSample, SkipGramBatch<B>> for SkipGramBatcher<B> {
    fn batch(&self, items: Vec<SkipGramSample>) -> SkipGramBatch<B> {
        let batch_size = items.len();
        // Every sample carries the same number of negatives
        let width      = 1 + items[0].negatives.len();

        let centers: Vec<i32> = items.iter().map(|s| s.center as i32).collect();

        let targets: Vec<i32> = items
            .iter()
            .flat_map(|s| iter::once(s.context).chain(s.negatives.iter().copied()))
            .map(|id| id as i32)
            .collect();

        let labels: Vec<f32> = items
            .iter()
            .flat_map(|s| iter::once(1.0f32).chain(iter::repeat(-1.0f32).take(s.negatives.len())))
            .collect();

        let centers = Tensor::<B, 1, Int>::from_ints(centers.as_slice(), &self.device)
            .reshape([batch_size, 1]);

        let targets = Tensor::<B, 1, Int>::from_ints(targets.as_slice(), &self.device)
            .reshape([batch_size, width]);

        let labels = Tensor::<B, 1>::from_floats(labels.as_slice(), &self.device)
            .reshape([batch_size, width]);

        SkipGramBatch { centers, targets, labels }
    }
}
