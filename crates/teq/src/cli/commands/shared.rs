//! Helpers shared by the subcommand implementations.

use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use teq_config::Config;
use teq_context::ContextSet;

use crate::cli::args::CorpusArgs;

/// Reads a context list from a file, or from stdin when no file is given.
///
/// Any malformed line aborts with an error before any corpus file is
/// opened.
pub(crate) fn load_contexts(path: Option<&Path>) -> Result<ContextSet, ExitCode> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            eprintln!("error: failed to read contexts file {}: {e}", path.display());
            ExitCode::FAILURE
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|e| {
                eprintln!("error: failed to read contexts from stdin: {e}");
                ExitCode::FAILURE
            })?;
            buffer
        }
    };

    ContextSet::from_lines(text.lines()).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Resolves the named corpus files against the corpus path.
///
/// The `--corpus-path` flag overrides the configured value. Files that
/// do not exist after resolution are skipped with a warning; they are
/// not fatal to the rest of the batch.
pub(crate) fn resolve_corpus_files(corpus: &CorpusArgs) -> Result<Vec<PathBuf>, ExitCode> {
    let cwd = env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })?;
    let mut config = Config::load(&cwd).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    if let Some(dir) = &corpus.corpus_path {
        config.corpus_path = Some(dir.clone());
    }

    let mut resolved = Vec::with_capacity(corpus.files.len());
    for name in &corpus.files {
        let path = config.resolve_corpus_file(name);
        if path.is_file() {
            resolved.push(path);
        } else {
            eprintln!("warning: skipping missing corpus file {}", path.display());
        }
    }
    Ok(resolved)
}

/// Returns the basename of a corpus path for display.
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        })
}
