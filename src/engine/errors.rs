//! Error types for versegraph construction and graph mutation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a poet or mutating the affinity graph.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Poem generation itself never fails: once a [`crate::engine::poet::GraphPoet`]
/// is constructed, `poem` is a total function over string input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PoetError {
    /// The corpus file could not be located or read.
    ///
    /// Surfaced to the caller of construction; the engine cannot recover
    /// from a missing or unreadable corpus.
    #[error("cannot read corpus {}: {source}", .path.display())]
    Corpus {
        /// The path that failed to open or read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An attempt to set a non-positive edge weight.
    ///
    /// Edge weights are adjacency counts and must be strictly positive.
    /// A zero weight is a programming error in the caller, never a
    /// user-facing condition; it is rejected at the point of the `set` call.
    #[error("edge weight must be strictly positive, got {0}")]
    InvalidWeight(u32),

    /// A representation invariant was broken after construction.
    ///
    /// Indicates a construction bug (non-normalized vertex, malformed
    /// weight), not a recoverable condition. The constructor guards on
    /// this with a debug assertion.
    #[error("affinity graph invariant violated: {0}")]
    Invariant(String),
}
