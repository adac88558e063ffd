//! End-to-end tests for the poet: corpus files in `tests/fixtures` through
//! poem generation.

use std::path::PathBuf;

use versegraph::{poet_from_path, GraphPoet, PoetError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn missing_corpus_file_surfaces_resource_error() {
    let err = poet_from_path(fixture("no-such-corpus.txt")).unwrap_err();
    match err {
        PoetError::Corpus { path, .. } => {
            assert!(path.ends_with("no-such-corpus.txt"));
        }
        other => panic!("expected Corpus error, got {other:?}"),
    }
}

#[test]
fn unreadable_corpus_directory_surfaces_resource_error() {
    // A directory is a readable path but not a readable text resource.
    let dir = tempfile::tempdir().unwrap();
    let err = poet_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, PoetError::Corpus { .. }));
}

#[test]
fn empty_corpus_passes_input_through() {
    let poet = poet_from_path(fixture("empty.txt")).unwrap();
    assert!(poet.graph().is_empty());
    assert_eq!(poet.poem("This is a test."), "This is a test.");
}

#[test]
fn one_word_corpus_has_no_edges_and_passes_input_through() {
    let poet = poet_from_path(fixture("one-word.txt")).unwrap();
    assert_eq!(poet.graph().edge_count(), 0);
    assert_eq!(poet.poem("This is a test."), "This is a test.");
}

#[test]
fn hello_goodbye_corpus_counts_adjacencies_with_punctuation() {
    let poet = poet_from_path(fixture("hello-goodbye.txt")).unwrap();

    assert_eq!(poet.graph().weight("hello,", "hello,"), 2);
    assert_eq!(poet.graph().weight("hello,", "goodbye!"), 1);

    // "hello" (without the comma) is not a vertex, so no bridge exists.
    assert_eq!(poet.poem("Hello goodbye"), "Hello goodbye");
}

#[test]
fn mugar_omni_theater_reproduces_documented_example() {
    let poet = poet_from_path(fixture("mugar-omni-theater.txt")).unwrap();

    assert_eq!(poet.poem("Test the system."), "Test of the system.");
    assert_eq!(poet.poem(""), "");
    assert_eq!(poet.poem("Test."), "Test.");
}

#[test]
fn cycle_corpus_bridges_self_adjacent_input() {
    let poet = poet_from_path(fixture("cycle.txt")).unwrap();

    assert_eq!(poet.graph().weight("a", "b"), 1);
    assert_eq!(poet.graph().weight("b", "a"), 1);
    assert_eq!(poet.poem("a a"), "a b a");
}

#[test]
fn constructed_poet_satisfies_rep_invariants() {
    let poet = poet_from_path(fixture("mugar-omni-theater.txt")).unwrap();
    assert!(poet.check_rep().is_ok());
}

#[test]
fn repeated_poem_calls_are_identical() {
    let poet = poet_from_path(fixture("mugar-omni-theater.txt")).unwrap();
    let first = poet.poem("Test the system.");
    for _ in 0..20 {
        assert_eq!(poet.poem("Test the system."), first);
    }
}

#[test]
fn concurrent_poem_calls_share_the_poet() {
    // The graph is immutable after construction, so shared references
    // across threads are sound.
    let poet = GraphPoet::from_tokens(
        "This is a test of the Mugar Omni Theater sound system.".split_whitespace(),
    )
    .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| poet.poem("Test the system.")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Test of the system.");
        }
    });
}
