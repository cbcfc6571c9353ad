//! Implementation of `teq find`.

use std::{path::Path, process::ExitCode};

use rayon::prelude::*;
use serde::Serialize;
use teq_context::ContextSet;
use teq_corpus::CorpusFile;
use teq_score::{FeatureSet, ScoreOptions, ScoredItem, find_equivalents};

use super::shared::{basename, load_contexts, resolve_corpus_files};
use crate::cli::args::FindCommand;

/// JSON output for one corpus file's results.
#[derive(Serialize)]
struct JsonFileResults {
    /// Basename of the corpus file.
    file: String,
    /// Ranked candidates with their scores.
    matches: Vec<ScoredItem>,
}

/// Scores each corpus file against the context list and prints the
/// ranked candidates.
pub fn run(cmd: &FindCommand) -> ExitCode {
    let contexts = match load_contexts(cmd.context.contexts.as_deref()) {
        Ok(contexts) => contexts,
        Err(code) => return code,
    };

    let options = ScoreOptions {
        features: FeatureSet::new(cmd.features.iter().copied()),
        model: cmd.score,
        max_ratio: cmd.max_ratio,
        top_n: (cmd.n_best > 0).then_some(cmd.n_best),
    };
    if let Err(e) = options.validate() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let files = match resolve_corpus_files(&cmd.corpus) {
        Ok(files) => files,
        Err(code) => return code,
    };

    // One independent task per file; results come back in input order.
    let results: Vec<Result<Vec<ScoredItem>, String>> = files
        .par_iter()
        .map(|path| score_file(path, &contexts, &options))
        .collect();

    let mut per_file = Vec::with_capacity(files.len());
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(scored) => per_file.push((basename(path), scored)),
            Err(message) => {
                eprintln!("error: {message}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cmd.json {
        return print_json(per_file);
    }

    for (file, scored) in per_file {
        println!("{file}");
        for item in scored {
            println!("    {:.2}  {}", item.score, item.item);
        }
        println!();
    }
    ExitCode::SUCCESS
}

/// Scores one corpus file, stringifying errors for cross-thread return.
fn score_file(
    path: &Path,
    contexts: &ContextSet,
    options: &ScoreOptions,
) -> Result<Vec<ScoredItem>, String> {
    let corpus = CorpusFile::read(path).map_err(|e| e.to_string())?;
    find_equivalents(&corpus, contexts, options).map_err(|e| e.to_string())
}

/// Prints results as pretty JSON.
fn print_json(per_file: Vec<(String, Vec<ScoredItem>)>) -> ExitCode {
    let output: Vec<JsonFileResults> = per_file
        .into_iter()
        .map(|(file, matches)| JsonFileResults { file, matches })
        .collect();
    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
