// ============================================================
// Layer 5 — Word2Vec Trainer
// ============================================================
// Turns a fully materialised list of sentences into a
// Word2VecModel:
//
//   Step 1: Tokenise every sentence           (Preprocessor)
//   Step 2: Build the vocabulary (min_count)  (Vocabulary)
//   Step 3: Build skip-gram pairs             (SkipGramDataset)
//   Step 4: Epoch loop: forward, loss, Adam   (SkipGramModel)
//   Step 5: Copy the input table out          (Word2VecModel)
//
// Training runs on Autodiff<Wgpu> from the CLI; every function
// is generic over the backend so tests run on NdArray.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam
//            Mikolov et al. (2013) Distributed Representations

use anyhow::Result;
use burn::{
    backend::{wgpu::WgpuDevice, Autodiff, Wgpu},
    data::{dataloader::DataLoaderBuilder, dataset::Dataset},
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};

use crate::application::train_use_case::Word2VecConfig;
use crate::data::{
    batcher::SkipGramBatcher,
    dataset::SkipGramDataset,
    preprocessor::Preprocessor,
    vocabulary::Vocabulary,
};
use crate::domain::traits::SentenceSource;
use crate::infra::metrics::EpochMetrics;
use crate::ml::embeddings::Word2VecModel;
use crate::ml::model::{SkipGramConfig, SkipGramModel};

pub type TrainBackend = Autodiff<Wgpu>;

/// A trained model plus the per-epoch loss history.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model:   Word2VecModel,
    pub metrics: Vec<EpochMetrics>,
}

pub struct Word2VecTrainer {
    config: Word2VecConfig,
}

impl Word2VecTrainer {
    pub fn new(config: Word2VecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Word2VecConfig {
        &self.config
    }

    /// Train on the default WGPU device.
    pub fn train(&self, sentences: &[String]) -> Result<TrainingOutcome> {
        let device = WgpuDevice::default();
        tracing::info!("Using WGPU device: {:?}", device);
        self.train_on::<TrainBackend>(sentences, &device)
    }

    /// Train on any autodiff backend.
    pub fn train_on<B: AutodiffBackend>(
        &self,
        sentences: &[String],
        device:    &B::Device,
    ) -> Result<TrainingOutcome> {
        let cfg = &self.config;
        cfg.validate()?;

        let prep = Preprocessor::new();
        let tokenised: Vec<Vec<String>> = sentences.iter().map(|s| prep.tokens(s)).collect();

        let vocab = Vocabulary::build(&tokenised, cfg.min_count);
        tracing::info!(
            "Vocabulary: {} words with count >= {} from {} sentences",
            vocab.len(),
            cfg.min_count,
            sentences.len()
        );

        if vocab.is_empty() {
            tracing::warn!("No token reaches min_count={}, returning an empty model", cfg.min_count);
            return Ok(self.untrained(vocab));
        }

        let encoded: Vec<Vec<u32>> = tokenised.iter().map(|t| vocab.encode(t)).collect();
        drop(tokenised);

        let dataset = SkipGramDataset::build(
            &encoded,
            &vocab.noise_weights(),
            cfg.window,
            cfg.negative,
            cfg.seed,
        )?;

        if dataset.is_empty() {
            tracing::warn!("No skip-gram pairs (every sentence has one known word)");
            return Ok(self.untrained(vocab));
        }

        let (vectors, metrics) = train_loop::<B>(cfg, vocab.len(), dataset, device)?;
        let model = Word2VecModel::new(vocab, vectors, cfg.clone())?;

        Ok(TrainingOutcome { model, metrics })
    }

    fn untrained(&self, vocab: Vocabulary) -> TrainingOutcome {
        TrainingOutcome {
            model:   Word2VecModel::untrained(vocab, self.config.clone()),
            metrics: Vec::new(),
        }
    }
}

fn train_loop<B: AutodiffBackend>(
    cfg:        &Word2VecConfig,
    vocab_size: usize,
    dataset:    SkipGramDataset,
    device:     &B::Device,
) -> Result<(Vec<f32>, Vec<EpochMetrics>)> {
    let pair_count = dataset.pair_count();

    let mut model: SkipGramModel<B> = SkipGramConfig::new(vocab_size, cfg.vector_size).init(device);
    let mut optim = AdamConfig::new().init::<B, SkipGramModel<B>>();

    let batcher = SkipGramBatcher::<B>::new(device.clone());
    let loader  = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(cfg.workers)
        .build(dataset);

    tracing::info!(
        "Training {} pairs: vector_size={}, window={}, negative={}, workers={}",
        pair_count,
        cfg.vector_size,
        cfg.window,
        cfg.negative,
        cfg.workers
    );

    let mut metrics   = Vec::with_capacity(cfg.epochs);
    let mut best_loss = f64::INFINITY;

    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in loader.iter() {
            let loss = model.forward_loss(batch.centers, batch.targets, batch.labels);

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches  += 1;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.learning_rate, model, grads);
        }

        let avg_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        tracing::info!("Epoch {:>3}/{} | loss={:.4} | batches={}", epoch, cfg.epochs, avg_loss, batches);

        let epoch_metrics = EpochMetrics::new(epoch, avg_loss, batches);
        if epoch_metrics.is_improvement(best_loss) {
            best_loss = avg_loss;
            tracing::debug!("New best loss at epoch {}", epoch);
        } else {
            tracing::warn!("Loss did not improve at epoch {} (best {:.4})", epoch, best_loss);
        }
        metrics.push(epoch_metrics);
    }

    Ok((model.input_vectors()?, metrics))
}

// ─── Word2VecSource ───────────────────────────────────────────────────────────
/// Word2vec training for anything that can stream slice sentences.
///
/// Sentences are fully collected before training starts; the
/// first extraction error aborts the run.
pub trait Word2VecSource: SentenceSource {
    /// Train with the fixed defaults: 100 dimensions, min_count 10, 8 workers.
    fn word2vec_model(&self, slice_name: &str) -> Result<Word2VecModel> {
        self.word2vec_model_with(slice_name, &Word2VecConfig::default())
    }

    /// Train on the default WGPU device.
    fn word2vec_model_with(&self, slice_name: &str, config: &Word2VecConfig) -> Result<Word2VecModel> {
        self.word2vec_model_on::<TrainBackend>(slice_name, config, &WgpuDevice::default())
    }

    fn word2vec_model_on<B: AutodiffBackend>(
        &self,
        slice_name: &str,
        config:     &Word2VecConfig,
        device:     &B::Device,
    ) -> Result<Word2VecModel> {
        let sentences = collect_sentences(self, slice_name)?;
        Ok(Word2VecTrainer::new(config.clone()).train_on::<B>(&sentences, device)?.model)
    }
}

impl<S: SentenceSource + ?Sized> Word2VecSource for S {}

/// Materialise every sentence of a slice.
pub fn collect_sentences<S: SentenceSource + ?Sized>(source: &S, slice_name: &str) -> Result<Vec<String>> {
    let sentences: Vec<String> = source.sentences(slice_name)?.collect::<Result<_>>()?;
    tracing::info!("Collected {} sentences from slice '{}'", sentences.len(), slice_name);
    Ok(sentences)
}
