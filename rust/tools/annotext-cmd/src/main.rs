use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::PipelineArgs;
use commands::annotate::AnnotateMode;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "annotext-cmd")]
#[command(about = "Command-line utility for annotated text analysis")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize text and print the tokens with their positions
    Tokenize {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Keep only the tokens inside annotation intervals
    Annotate {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Comma-separated (start, length) pairs, e.g. "0,3,5,2"
        #[arg(short, long)]
        markers: Option<String>,

        /// Filter by intervals without emitting marker tokens
        #[arg(long, conflicts_with = "any")]
        simple: bool,

        /// Stack an "_any_" token on every token instead of filtering
        #[arg(long)]
        any: bool,
    },

    /// Replace recognized words with an annotation term
    Tag {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Built-in annotator: colors or animals
        #[arg(short, long)]
        annotator: Option<String>,

        /// Custom annotator vocabulary (can be specified multiple times)
        #[arg(short, long = "word")]
        words: Vec<String>,

        /// Term emitted for recognized words
        #[arg(long)]
        term: Option<String>,

        /// Stack an "_any_" token on every annotation
        #[arg(long)]
        any: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tokenize { pipeline } => commands::tokenize::run(pipeline),
        Commands::Annotate {
            pipeline,
            markers,
            simple,
            any,
        } => {
            let mode = if any {
                AnnotateMode::Any
            } else if simple {
                AnnotateMode::Simple
            } else {
                AnnotateMode::Markers
            };
            commands::annotate::run(pipeline, markers, mode)
        }
        Commands::Tag {
            pipeline,
            annotator,
            words,
            term,
            any,
        } => commands::tag::run(pipeline, annotator, words, term, any),
    }
}
