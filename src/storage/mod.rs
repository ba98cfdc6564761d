//! Loading of the corpus, the common-word list and run configuration.

use crate::memory::{CommonWords, DreamConfig};
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Characters ending a sentence in the corpus
pub const SENTENCE_BREAKS: [char; 5] = ['.', '!', '?', '\'', '"'];

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Reads a whole text file
pub fn read_text(path: &Path) -> Result<String, StorageError> {
    fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Flattens newlines and splits on sentence-ending punctuation.
///
/// Empty pieces are kept, so empty content yields one empty sentence.
pub fn split_sentences(content: &str) -> Vec<String> {
    content
        .replace('\n', " ")
        .split(&SENTENCE_BREAKS[..])
        .map(str::to_owned)
        .collect()
}

/// Sentences of the corpus at `path`. An unreadable file counts as empty.
pub fn load_corpus(path: &Path) -> Vec<String> {
    split_sentences(&read_or_empty(path))
}

/// Common words listed one per line at `path`. An unreadable file counts
/// as empty.
pub fn load_common_words(path: &Path) -> CommonWords {
    CommonWords::parse(&read_or_empty(path))
}

/// Parses a TOML config file. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<DreamConfig, StorageError> {
    let content = read_text(path)?;
    Ok(toml::from_str(&content)?)
}

fn read_or_empty(path: &Path) -> String {
    match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("{}; continuing with empty input", e);
            String::new()
        }
    }
}
