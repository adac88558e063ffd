//! # Versegraph - Affinity-Graph Poetry Generator
//!
//! Versegraph derives a word affinity graph from a text corpus and uses it
//! to insert bridge words into input sentences, producing derived poems.
//!
//! ## Architecture
//!
//! The system is organized into two modules:
//!
//! - **frontend**: Corpus intake — reading text resources and splitting
//!   them into whitespace-delimited tokens
//! - **engine**: Core graph construction and poem generation
//!
//! ## Usage
//!
//! ```rust
//! use versegraph::GraphPoet;
//!
//! let corpus = "This is a test of the Mugar Omni Theater sound system.";
//! let poet = GraphPoet::from_tokens(corpus.split_whitespace()).expect("valid corpus");
//!
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod frontend;

// Re-export commonly used types
pub use engine::errors::PoetError;
pub use engine::graph::AffinityGraph;
pub use engine::poet::GraphPoet;

/// Builds a [`GraphPoet`] from the corpus file at `path`.
///
/// Convenience wrapper over [`GraphPoet::from_corpus_path`]: reads the
/// file, tokenizes it on whitespace, and derives the affinity graph.
///
/// # Arguments
///
/// * `path` - Path to the corpus text file
///
/// # Returns
///
/// * `Ok(GraphPoet)` - A poet ready to generate poems
/// * `Err(PoetError::Corpus)` - The corpus could not be located or read
///
/// # Example
///
/// ```rust,ignore
/// use versegraph::poet_from_path;
///
/// let poet = poet_from_path("corpus/mugar-omni-theater.txt")?;
/// println!("{}", poet.poem("Test the system."));
/// ```
pub fn poet_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<GraphPoet, PoetError> {
    GraphPoet::from_corpus_path(path)
}
