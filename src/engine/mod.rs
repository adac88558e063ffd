//! The core engine for affinity-graph poetry generation.
//!
//! This module provides:
//! - **errors**: Error types for construction and graph mutation
//! - **graph**: The weighted directed word-adjacency graph
//! - **poet**: Graph construction from a corpus and bridge-word insertion

pub mod errors;
pub mod graph;
pub mod poet;
