//! # Corpus Intake
//!
//! This module is the poet's text-reading collaborator: it turns a corpus
//! resource into the ordered token sequence the engine consumes. Tokens
//! are runs of non-whitespace characters; splitting happens on spaces,
//! tabs, and newlines, and empty tokens are discarded. No normalization
//! happens here — lowercasing is a construction step of the engine.

use std::fs;
use std::path::Path;

use crate::engine::errors::PoetError;

/// Reads the corpus file at `path` into a string.
///
/// # Errors
///
/// Returns [`PoetError::Corpus`] carrying the offending path if the file
/// cannot be located or read.
pub fn read_corpus(path: &Path) -> Result<String, PoetError> {
    fs::read_to_string(path).map_err(|source| PoetError::Corpus {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits corpus text into whitespace-delimited tokens.
///
/// Splits on runs of whitespace (space, tab, newline), so the iterator
/// never yields an empty token. Pure; preserves original case.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
