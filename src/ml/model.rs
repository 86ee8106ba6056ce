// ============================================================
// Layer 5 — Skip-gram Network (Burn)
// ============================================================
// Two embedding tables of shape [vocab_size, vector_size]:
//
//   input   the vectors we keep after training
//   output  context vectors, only used to score pairs
//
// score(center, target) = input[center] · output[target]
//
// Reference: Burn Book §3 (Building Blocks)
//            Mikolov et al. (2013) Distributed Representations

use anyhow::Result;
use burn::{
    nn::{Embedding, EmbeddingConfig, Initializer},
    prelude::*,
    tensor::{activation::log_sigmoid, backend::AutodiffBackend},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct SkipGramConfig {
    pub vocab_size:  usize,
    pub vector_size: usize,
}

impl SkipGramConfig {
    /// Input vectors start uniform in ±0.5/dim, output vectors at zero,
    /// the same starting point the reference word2vec tool uses.
    pub fn init<B: Backend>(&self, device: &B::Device) -> SkipGramModel<B> {
        let bound = 0.5 / self.vector_size as f64;

        let input = EmbeddingConfig::new(self.vocab_size, self.vector_size)
            .with_initializer(Initializer::Uniform { min: -bound, max: bound })
            .init(device);
        let output = EmbeddingConfig::new(self.vocab_size, self.vector_size)
            .with_initializer(Initializer::Zeros)
            .init(device);

        SkipGramModel { input, output }
    }
}

/// Skip-gram with negative sampling: two embedding tables, one
/// for words as centers and one for words as context.
#[derive(Module, Debug)]
pub struct SkipGramModel<B: Backend> {
    pub input:  Embedding<B>,
    pub output: Embedding<B>,
}

impl<B: Backend> SkipGramModel<B> {
    /// centers: [batch, 1], targets: [batch, k] → scores: [batch, k]
    pub fn forward(&self, centers: Tensor<B, 2, Int>, targets: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, width] = targets.dims();

        let center = self.input.forward(centers);   // [batch, 1, dim]
        let target = self.output.forward(targets);  // [batch, k, dim]

        // Dot product of every target with its center
        target
            .matmul(center.swap_dims(1, 2))          // [batch, k, 1]
            .reshape([batch_size, width])
    }

    /// Flattened input table, row-major [vocab_size × vector_size].
    pub fn input_vectors(&self) -> Result<Vec<f32>> {
        self.input
            .weight
            .val()
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read embedding weights: {e:?}"))
    }
}

impl<B: AutodiffBackend> SkipGramModel<B> {
    /// Negative-sampling loss, averaged over the batch:
    ///   -log σ(s_context) - Σ log σ(-s_negative)
    ///
    /// labels are +1 for the context column and -1 for negatives,
    /// so both terms collapse into log σ(score * label).
    pub fn forward_loss(
        &self,
        centers: Tensor<B, 2, Int>,
        targets: Tensor<B, 2, Int>,
        labels:  Tensor<B, 2>,
    ) -> Tensor<B, 1> {
        let scores = self.forward(centers, targets);
        log_sigmoid(scores * labels).sum_dim(1).mean().neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{Autodiff, NdArray};

    type TestBackend = Autodiff<NdArray>;

    #[test]
    fn test_forward_shapes() {
        let device = Default::default();
        let model: SkipGramModel<TestBackend> = SkipGramConfig::new(10, 4).init(&device);

        let centers = Tensor::<TestBackend, 1, Int>::from_ints([1, 2, 3].as_slice(), &device)
            .reshape([3, 1]);
        let targets = Tensor::<TestBackend, 1, Int>::from_ints([4, 5, 6, 7, 8, 9].as_slice(), &device)
            .reshape([3, 2]);

        assert_eq!(model.forward(centers, targets).dims(), [3, 2]);
        assert_eq!(model.input_vectors().unwrap().len(), 40);
    }

    #[test]
    fn test_initial_loss_is_k_log_two() {
        // Zero output table → every score is 0 → each term is log 2
        let device = Default::default();
        let model: SkipGramModel<TestBackend> = SkipGramConfig::new(5, 3).init(&device);

        let centers = Tensor::<TestBackend, 1, Int>::from_ints([0, 1].as_slice(), &device)
            .reshape([2, 1]);
        let targets = Tensor::<TestBackend, 1, Int>::from_ints([1, 2, 3, 0, 2, 4].as_slice(), &device)
            .reshape([2, 3]);
        let labels = Tensor::<TestBackend, 1>::from_floats([1.0f32, -1.0, -1.0, 1.0, -1.0, -1.0].as_slice(), &device)
            .reshape([2, 3]);

        let loss: f64 = model
            .forward_loss(centers, targets, labels)
            .into_scalar()
            .elem::<f64>();
        assert!((loss - 3.0 * std::f64::consts::LN_2).abs() < 1e-4);
    }
}
