//! # Graph Poet
//!
//! This module implements the graph-based poetry generator on top of
//! [`AffinityGraph`].
//!
//! The poet is initialized with a corpus of text, from which it derives a
//! word affinity graph. Words are non-empty, case-insensitive runs of
//! non-whitespace characters, delimited in the corpus by spaces, tabs,
//! newlines, or the ends of the input. Edges count adjacencies: the weight
//! of the edge `w1 → w2` is the number of times `w1` is immediately
//! followed by `w2` anywhere in the corpus. Adjacency spans line
//! boundaries; the corpus is one continuous token stream.
//!
//! For example, the corpus
//!
//! ```text
//! Hello, HELLO, hello, goodbye!
//! ```
//!
//! yields two edges: `hello, → hello,` with weight 2 and
//! `hello, → goodbye!` with weight 1.
//!
//! Given an input string, [`GraphPoet::poem`] attempts to insert a bridge
//! word between every adjacent pair of input words. The bridge between
//! `w1` and `w2` is the word `b` maximizing the combined weight of the
//! two-edge path `w1 → b → w2` in the affinity graph; if no such path
//! exists, no bridge is inserted. Input words keep their original case,
//! bridge words are emitted lowercase, and every word in the output is
//! separated by a single space. With the corpus
//!
//! ```text
//! This is a test of the Mugar Omni Theater sound system.
//! ```
//!
//! the input `Test the system.` produces `Test of the system.`.

use std::path::Path;

use crate::engine::errors::PoetError;
use crate::engine::graph::AffinityGraph;
use crate::frontend::corpus;

/// A graph-based poetry generator.
///
/// Construction builds the affinity graph once; afterwards the poet is
/// immutable and [`poem`] is a pure function of the graph and its input,
/// safe to call from multiple threads through a shared reference.
///
/// [`poem`]: GraphPoet::poem
#[derive(Debug, Clone)]
pub struct GraphPoet {
    graph: AffinityGraph,
}

impl GraphPoet {
    /// Builds a poet from the corpus file at `path`.
    ///
    /// Reads the file, splits it into whitespace-delimited tokens, and
    /// delegates to [`from_tokens`].
    ///
    /// # Errors
    ///
    /// Returns [`PoetError::Corpus`] if the file cannot be located or read.
    ///
    /// [`from_tokens`]: GraphPoet::from_tokens
    pub fn from_corpus_path<P: AsRef<Path>>(path: P) -> Result<Self, PoetError> {
        let text = corpus::read_corpus(path.as_ref())?;
        Self::from_tokens(corpus::tokenize(&text))
    }

    /// Builds a poet from an already-tokenized corpus.
    ///
    /// Every token is normalized to lowercase, then each consecutive pair
    /// increments the weight of the corresponding directed edge, so the
    /// final weight of `w1 → w2` is the exact count of times `w2`
    /// immediately followed `w1` in the corpus. A corpus with fewer than
    /// two tokens yields a graph with no edges; this is not an error.
    pub fn from_tokens<I>(tokens: I) -> Result<Self, PoetError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut graph = AffinityGraph::new();
        let mut prev: Option<String> = None;
        for token in tokens {
            let word = token.as_ref().to_lowercase();
            if let Some(source) = prev.take() {
                let weight = graph.weight(&source, &word) + 1;
                graph.set(&source, &word, weight)?;
            }
            prev = Some(word);
        }
        let poet = Self { graph };
        debug_assert!(
            poet.check_rep().is_ok(),
            "construction must uphold graph invariants"
        );
        Ok(poet)
    }

    /// Borrows the underlying affinity graph.
    pub fn graph(&self) -> &AffinityGraph {
        &self.graph
    }

    /// Validates the representation invariants of the affinity graph.
    ///
    /// Checks that every vertex is lowercase, non-empty, and free of
    /// whitespace, and that every edge weight is strictly positive. A
    /// violation indicates a construction bug; the constructors guard on
    /// this with a debug assertion.
    pub fn check_rep(&self) -> Result<(), PoetError> {
        for vertex in self.graph.vertices() {
            if vertex.is_empty() {
                return Err(PoetError::Invariant("empty vertex".into()));
            }
            if vertex.chars().any(char::is_whitespace) {
                return Err(PoetError::Invariant(format!(
                    "vertex {vertex:?} contains whitespace"
                )));
            }
            if vertex.chars().any(char::is_uppercase) {
                return Err(PoetError::Invariant(format!(
                    "vertex {vertex:?} is not lowercase"
                )));
            }
            for (target, weight) in self.graph.targets(vertex) {
                if weight == 0 {
                    return Err(PoetError::Invariant(format!(
                        "edge {vertex:?} -> {target:?} has zero weight"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Generates a poem from `input` by bridge-word insertion.
    ///
    /// The input is split on runs of whitespace. For each adjacent pair of
    /// input words, the maximum-weight bridge (see [`module docs`]) is
    /// inserted between them if one exists. Input words keep their
    /// original case; bridges are lowercase; all separators are a single
    /// space with no leading or trailing whitespace.
    ///
    /// Empty input (or input with no words) yields the empty string; a
    /// single word is returned unchanged. This operation never fails and
    /// is deterministic for a fixed poet.
    ///
    /// [`module docs`]: self
    pub fn poem(&self, input: &str) -> String {
        let words: Vec<&str> = input.split_whitespace().collect();
        let mut out = String::new();
        for i in 0..words.len().saturating_sub(1) {
            let source = words[i].to_lowercase();
            let target = words[i + 1].to_lowercase();
            out.push_str(words[i]);
            out.push(' ');
            if let Some(bridge) = self.best_bridge(&source, &target) {
                out.push_str(bridge);
                out.push(' ');
            }
        }
        if let Some(last) = words.last() {
            out.push_str(last);
        }
        out
    }

    /// Finds the bridge word maximizing `weight(source → b) + weight(b → target)`.
    ///
    /// Candidates are the outgoing neighbors of `source` that reach
    /// `target` in one hop. Ties on the combined weight resolve to the
    /// lexicographically smallest bridge, which keeps the result
    /// deterministic regardless of hash-map iteration order.
    fn best_bridge<'a>(&'a self, source: &str, target: &str) -> Option<&'a str> {
        let mut best: Option<(&str, u32)> = None;
        for (bridge, to_bridge) in self.graph.targets(source) {
            let to_target = self.graph.weight(bridge, target);
            if to_target == 0 {
                continue;
            }
            let combined = to_bridge + to_target;
            let better = match best {
                None => true,
                Some((b, w)) => combined > w || (combined == w && bridge < b),
            };
            if better {
                best = Some((bridge, combined));
            }
        }
        best.map(|(bridge, _)| bridge)
    }
}
