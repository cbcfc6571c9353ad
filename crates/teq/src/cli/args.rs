//! Clap argument definitions for the `teq` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use teq_score::{FeatureScheme, ScoreModel};

/// Parses a feature scheme from a string.
fn parse_feature(s: &str) -> Result<FeatureScheme, String> {
    s.parse()
}

/// Parses a scoring model from a string.
fn parse_model(s: &str) -> Result<ScoreModel, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "teq")]
#[command(about = "Finding translation equivalents in parallel corpora")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flags naming the corpus files to process.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory of corpus files (overrides value in config file)
    #[arg(long, value_name = "DIR")]
    pub corpus_path: Option<PathBuf>,

    /// Corpus files to process
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,
}

/// Shared flag selecting the context-list source.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// File containing contexts (from `teq search`), default: stdin
    #[arg(short = 'c', long, value_name = "FILE")]
    pub contexts: Option<PathBuf>,
}

/// Arguments for `teq find`.
#[derive(Args, Debug, Clone)]
pub struct FindCommand {
    /// Comma-separated list of features: words, bigrams, prefixes,
    /// suffixes, subsequences [default: words]
    #[arg(
        short = 'f',
        long,
        value_name = "FEATURES",
        value_delimiter = ',',
        default_value = "words",
        value_parser = parse_feature
    )]
    pub features: Vec<FeatureScheme>,

    /// Scoring model: bayes (Dirichlet-multinomial model), cosine
    #[arg(short = 's', long, value_name = "NAME", default_value = "bayes", value_parser = parse_model)]
    pub score: ScoreModel,

    /// Higher values widen the search space
    #[arg(short = 'm', long, value_name = "N", default_value_t = 4.0)]
    pub max_ratio: f64,

    /// Print the N best matches only; 0 prints all
    #[arg(short = 'n', long, value_name = "N", default_value_t = 5)]
    pub n_best: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Context-list source.
    pub context: ContextArgs,

    #[command(flatten)]
    /// Corpus files and path override.
    pub corpus: CorpusArgs,
}

/// Arguments for `teq search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Regular expression(s) to search for
    #[arg(short = 'e', long = "expression", value_name = "REGEX", required = true)]
    pub expressions: Vec<String>,

    /// Print matches for manual inspection
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Merge the matches of this search with contexts read from stdin
    #[arg(short = 'a', long)]
    pub append: bool,

    #[command(flatten)]
    /// Corpus files and path override.
    pub corpus: CorpusArgs,
}

/// Arguments for `teq show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Print the first N verses only; 0 prints all
    #[arg(short = 'n', long, value_name = "N", default_value_t = 0)]
    pub first_n: usize,

    /// Sort verses by length, shortest first
    #[arg(short = 's', long)]
    pub shortest_first: bool,

    #[command(flatten)]
    /// Context-list source.
    pub context: ContextArgs,

    #[command(flatten)]
    /// Corpus files and path override.
    pub corpus: CorpusArgs,
}

/// Supported `teq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score candidate translation equivalents against a context list
    #[command(after_help = "\
EXAMPLES:
  teq search -e 'katze' deu.txt | teq find fra.txt
  teq find -c cats.ctx -f words,suffixes -s cosine fra.txt spa.txt
  teq find -c cats.ctx -n 10 --json fra.txt")]
    Find(FindCommand),

    /// Search corpus files for a phenomenon, producing a context list
    #[command(after_help = "\
EXAMPLES:
  teq search -e 'katze' deu.txt
  teq search -e 'cat' -e 'cats' eng.txt > cats.ctx
  teq search -e 'gato' -a spa.txt < cats.ctx")]
    Search(SearchCommand),

    /// Display aligned verses for the positive sentences of a context list
    Show(ShowCommand),
}
