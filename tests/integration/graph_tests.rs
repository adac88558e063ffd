//! Integration tests for the affinity graph through the public API.

use versegraph::{AffinityGraph, PoetError};

#[test]
fn graph_round_trip_through_public_api() {
    let mut g = AffinityGraph::new();
    g.set("rose", "red", 3).unwrap();
    g.set("rose", "thorn", 1).unwrap();
    g.set("red", "rose", 2).unwrap();

    let mut vs: Vec<&str> = g.vertices().collect();
    vs.sort();
    assert_eq!(vs, vec!["red", "rose", "thorn"]);

    let mut out: Vec<(&str, u32)> = g.targets("rose").collect();
    out.sort();
    assert_eq!(out, vec![("red", 3), ("thorn", 1)]);

    assert_eq!(g.weight("red", "rose"), 2);
    assert_eq!(g.weight("thorn", "rose"), 0);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn set_overwrite_is_not_additive() {
    let mut g = AffinityGraph::new();
    g.set("a", "b", 5).unwrap();
    g.set("a", "b", 2).unwrap();

    assert_eq!(g.weight("a", "b"), 2);
}

#[test]
fn zero_weight_is_an_invalid_argument() {
    let mut g = AffinityGraph::new();
    let err = g.set("a", "b", 0).unwrap_err();

    assert!(matches!(err, PoetError::InvalidWeight(0)));
    assert_eq!(
        err.to_string(),
        "edge weight must be strictly positive, got 0"
    );
}

#[test]
fn targets_of_unknown_vertex_is_empty_not_an_error() {
    let g = AffinityGraph::new();
    assert_eq!(g.targets("ghost").count(), 0);
    assert_eq!(g.weight("ghost", "ghost"), 0);
}
