//! Implementation of `teq search`.

use std::process::ExitCode;

use regex::Regex;
use teq_context::{
    ContextSet,
    instances::{find_instances, find_matches},
};
use teq_corpus::CorpusFile;

use super::shared::{load_contexts, resolve_corpus_files};
use crate::cli::args::SearchCommand;

/// Searches corpus files for pattern instances and prints a context list
/// (or the matches themselves with `--verbose`).
pub fn run(cmd: &SearchCommand) -> ExitCode {
    let mut patterns = Vec::with_capacity(cmd.expressions.len());
    for expression in &cmd.expressions {
        match Regex::new(expression) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                eprintln!("error: invalid expression '{expression}': {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let prior = if cmd.append {
        match load_contexts(None) {
            Ok(contexts) => contexts,
            Err(code) => {
                eprintln!(
                    "note: with --append, teq search expects a context list on standard \
                     input; this list may be empty"
                );
                return code;
            }
        }
    } else {
        ContextSet::new()
    };

    let files = match resolve_corpus_files(&cmd.corpus) {
        Ok(files) => files,
        Err(code) => return code,
    };

    let mut corpora = Vec::with_capacity(files.len());
    for path in &files {
        match CorpusFile::read(path) {
            Ok(corpus) => corpora.push(corpus),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cmd.verbose {
        for example in find_matches(&corpora, &patterns) {
            println!(
                "{}<<<{}>>>{}",
                &example.sentence[..example.start],
                &example.sentence[example.start..example.end],
                &example.sentence[example.end..]
            );
        }
    } else {
        for entry in find_instances(&corpora, &patterns, &prior) {
            println!("{entry}");
        }
    }
    ExitCode::SUCCESS
}
