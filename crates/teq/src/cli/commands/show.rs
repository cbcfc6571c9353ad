//! Implementation of `teq show`.

use std::process::ExitCode;

use teq_corpus::CorpusFile;

use super::shared::{load_contexts, resolve_corpus_files};
use crate::cli::args::ShowCommand;

/// Prints the aligned verses of the context list's positive sentences.
///
/// Verses print in sentence-id order (or shortest first with `-s`),
/// not in the order the context list happens to name them.
pub fn run(cmd: &ShowCommand) -> ExitCode {
    let contexts = match load_contexts(cmd.context.contexts.as_deref()) {
        Ok(contexts) => contexts,
        Err(code) => return code,
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

    // Positive sentences present in every file, in sentence-id order.
    let mut verses: Vec<(&str, Vec<&str>)> = contexts
        .iter()
        .filter(|entry| entry.hits * 2 >= entry.total)
        .filter(|entry| corpora.iter().all(|c| c.contains(&entry.sentence_id)))
        .map(|entry| {
            let texts = corpora
                .iter()
                .map(|c| c.sentences[&entry.sentence_id].as_str())
                .collect();
            (entry.sentence_id.as_str(), texts)
        })
        .collect();

    if cmd.shortest_first {
        verses.sort_by_key(|(_, texts)| {
            texts
                .iter()
                .map(|text| text.chars().count())
                .sum::<usize>()
        });
    }

    if cmd.first_n > 0 {
        verses.truncate(cmd.first_n);
    }

    for (sent_id, texts) in verses {
        println!("{sent_id}");
        for text in texts {
            println!("{text}");
        }
        println!();
    }
    ExitCode::SUCCESS
}
