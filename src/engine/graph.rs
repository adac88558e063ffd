//! # Affinity Graph
//!
//! This module implements the weighted directed graph underlying the poet.
//!
//! Vertices are normalized word tokens: lowercase, non-empty, containing no
//! whitespace. Identity is the normalized string value. Each directed edge
//! carries a strictly positive integer weight, which the poet uses as an
//! adjacency count: the number of times the target token immediately
//! followed the source token in the corpus.
//!
//! ## Design
//!
//! The graph is an owned mapping from each vertex to its outgoing-edge
//! table (target → weight), backed by `FxHashMap` for fast lookups. There
//! is at most one edge per ordered vertex pair; `set` overwrites. Vertices
//! are created implicitly by the edges that reference them, so a target
//! with no outgoing edges still appears in the vertex set with an empty
//! table. No removal operations exist: the poet populates the graph once
//! and treats it as read-only afterwards.

use rustc_hash::FxHashMap;

use crate::engine::errors::PoetError;

/// A directed graph over string vertices with positive integer edge weights.
///
/// All accessors borrow immutably; the only mutating operation is [`set`].
/// Queries for absent vertices are answered with empty results rather than
/// errors, which keeps the bridge search in the poet branch-free.
///
/// [`set`]: AffinityGraph::set
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityGraph {
    /// Maps every vertex to its outgoing-edge table (target → weight).
    /// Pure targets are present with an empty table.
    out: FxHashMap<String, FxHashMap<String, u32>>,
}

impl AffinityGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over all vertex names. Order is unspecified.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.out.keys().map(String::as_str)
    }

    /// Iterates over `source`'s outgoing edges as `(target, weight)` pairs.
    ///
    /// Empty if `source` has no outgoing edges or is not in the graph.
    /// The iterator borrows the graph, so callers cannot mutate internal
    /// state through it.
    pub fn targets<'a>(&'a self, source: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        self.out
            .get(source)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(t, &w)| (t.as_str(), w)))
    }

    /// Returns the weight of the directed edge `source → target`, or `0`
    /// if no such edge exists.
    pub fn weight(&self, source: &str, target: &str) -> u32 {
        self.out
            .get(source)
            .and_then(|edges| edges.get(target))
            .copied()
            .unwrap_or(0)
    }

    /// Sets the weight of the directed edge `source → target` to exactly
    /// `weight`, creating both vertices if absent.
    ///
    /// Overwrite semantics: any previous weight for the pair is replaced.
    /// Additive accumulation is the caller's responsibility, computed from
    /// [`weight`] before calling `set`.
    ///
    /// # Errors
    ///
    /// Returns [`PoetError::InvalidWeight`] if `weight` is zero. Weights
    /// are adjacency counts and must be strictly positive.
    ///
    /// [`weight`]: AffinityGraph::weight
    pub fn set(&mut self, source: &str, target: &str, weight: u32) -> Result<(), PoetError> {
        if weight == 0 {
            return Err(PoetError::InvalidWeight(weight));
        }
        // Materialize the target vertex so the vertex set stays closed
        // under edge references.
        if !self.out.contains_key(target) {
            self.out.insert(target.to_string(), FxHashMap::default());
        }
        self.out
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string(), weight);
        Ok(())
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.out.len()
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.out.values().map(FxHashMap::len).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }
}
