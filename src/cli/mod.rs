// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to a
// use case in Layer 2. This is the only layer that prints.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, CorpusArgs, SentencesArgs, SimilarArgs, SliceArgs, TrainArgs};

use crate::application::{
    inspect_use_case::InspectUseCase,
    similar_use_case::SimilarUseCase,
    train_use_case::{TrainRequest, TrainUseCase},
};

#[derive(Parser, Debug)]
#[command(
    name = "hist-vec",
    version,
    about = "Walk sliced historical text corpora and train word2vec per slice."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Slices(args)    => run_slices(args),
            Commands::Paths(args)     => run_paths(args),
            Commands::Sentences(args) => run_sentences(args),
            Commands::Train(args)     => run_train(args),
            Commands::Similar(args)   => run_similar(args),
        }
    }
}

fn run_slices(args: CorpusArgs) -> Result<()> {
    for name in InspectUseCase::new(args.root).slices()? {
        println!("{name}");
    }
    Ok(())
}

fn run_paths(args: SliceArgs) -> Result<()> {
    for path in InspectUseCase::new(args.root).paths(&args.slice)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_sentences(args: SentencesArgs) -> Result<()> {
    let use_case  = InspectUseCase::new(args.slice.root);
    let sentences = use_case.sentences(args.kind.into(), &args.slice.slice, args.limit)?;
    for sentence in sentences {
        println!("{sentence}");
    }
    Ok(())
}

fn run_train(args: TrainArgs) -> Result<()> {
    let config  = (&args).into();
    let request = TrainRequest {
        root:    args.slice.root,
        slice:   args.slice.slice,
        kind:    args.kind.into(),
        out_dir: args.out,
    };

    tracing::info!("Starting training on slice '{}'", request.slice);
    let out_dir = request.out_dir.clone();
    let summary = TrainUseCase::new(request, config).execute()?;

    println!(
        "Trained on {} sentences: {} words, {} epochs. Saved to {}",
        summary.sentences,
        summary.vocabulary,
        summary.epochs,
        out_dir.display()
    );
    Ok(())
}

fn run_similar(args: SimilarArgs) -> Result<()> {
    let use_case = SimilarUseCase::new(args.model)?;
    for (word, score) in use_case.similar(&args.word, args.topn)? {
        println!("{word:<24} {score:.4}");
    }
    Ok(())
}
