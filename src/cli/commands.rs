// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Five subcommands:
//   slices     list the slices of a corpus
//   paths      list the files of one slice
//   sentences  print the sentences of one slice
//   train      train word2vec on one slice
//   similar    query a trained model
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::train_use_case::Word2VecConfig;
use crate::domain::document::DocumentKind;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the slices (sub-directories) of a corpus
    Slices(CorpusArgs),

    /// List every file in a slice
    Paths(SliceArgs),

    /// Print the sentences extracted from a slice
    Sentences(SentencesArgs),

    /// Train a word2vec model on one slice
    Train(TrainArgs),

    /// Show the nearest words to a query word
    Similar(SimilarArgs),
}

/// Document model used to parse the files of a slice
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    /// OCR'd periodical articles
    Article,
    /// Plain-text books
    Book,
}

impl From<KindArg> for DocumentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Article => DocumentKind::Article,
            KindArg::Book    => DocumentKind::Book,
        }
    }
}

#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Corpus root directory
    #[arg(long)]
    pub root: PathBuf,
}

#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Corpus root directory
    #[arg(long)]
    pub root: PathBuf,

    /// Slice (sub-directory) name
    #[arg(long)]
    pub slice: String,
}

#[derive(Args, Debug)]
pub struct SentencesArgs {
    #[command(flatten)]
    pub slice: SliceArgs,

    #[arg(long, value_enum, default_value_t = KindArg::Article)]
    pub kind: KindArg,

    /// Stop after this many sentences
    #[arg(long)]
    pub limit: Option<usize>,
}

/// All arguments for the `train` command.
/// Hyperparameter defaults are the fixed word2vec settings.
#[derive(Args, Debug)]
pub struct TrainArgs {
    #[command(flatten)]
    pub slice: SliceArgs,

    #[arg(long, value_enum, default_value_t = KindArg::Article)]
    pub kind: KindArg,

    /// Directory for model.json, train_config.json and metrics.csv
    #[arg(long, default_value = "models")]
    pub out: PathBuf,

    /// Dimensionality of the word vectors
    #[arg(long, default_value_t = 100)]
    pub vector_size: usize,

    /// Ignore words seen fewer times than this
    #[arg(long, default_value_t = 10)]
    pub min_count: usize,

    /// Data-loader worker threads
    #[arg(long, default_value_t = 8)]
    pub workers: usize,

    /// Context window on each side of the center word
    #[arg(long, default_value_t = 5)]
    pub window: usize,

    /// Negative samples per positive pair
    #[arg(long, default_value_t = 5)]
    pub negative: usize,

    #[arg(long, default_value_t = 5)]
    pub epochs: usize,

    #[arg(long, default_value_t = 0.025)]
    pub lr: f64,

    #[arg(long, default_value_t = 256)]
    pub batch_size: usize,

    #[arg(long, default_value_t = 1)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer config.
/// The application layer never sees clap types.
impl From<&TrainArgs> for Word2VecConfig {
    fn from(a: &TrainArgs) -> Self {
        Word2VecConfig {
            vector_size:   a.vector_size,
            min_count:     a.min_count,
            workers:       a.workers,
            window:        a.window,
            negative:      a.negative,
            epochs:        a.epochs,
            learning_rate: a.lr,
            batch_size:    a.batch_size,
            seed:          a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// Directory written by `train`
    #[arg(long, default_value = "models")]
    pub model: PathBuf,

    /// Query word
    #[arg(long)]
    pub word: String,

    /// Number of neighbours to show
    #[arg(long, default_value_t = 10)]
    pub topn: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_train_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from([
            "hist-vec", "train", "--root", "corpus", "--slice", "1850s",
        ])
        .unwrap();

        match cli.command {
            Commands::Train(args) => {
                assert_eq!(Word2VecConfig::from(&args), Word2VecConfig::default());
                assert!(matches!(args.kind, KindArg::Article));
            }
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn test_kind_flag_parses_book() {
        let cli = Cli::try_parse_from([
            "hist-vec", "sentences", "--root", "c", "--slice", "s", "--kind", "book", "--limit", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Sentences(args) => {
                assert_eq!(DocumentKind::from(args.kind), DocumentKind::Book);
                assert_eq!(args.limit, Some(3));
            }
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let parsed = Cli::try_parse_from([
            "hist-vec", "sentences", "--root", "c", "--slice", "s", "--kind", "pamphlet",
        ]);
        assert!(parsed.is_err());
    }
}
