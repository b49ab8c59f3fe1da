//! Tests for name-based search over suite and result trees: traversal
//! order, the direct/recursive distinction, and absent child collections.

use std::ptr;

use trellis::{find, CaseResult, Outcome, SuiteNode};

fn case(name: &str) -> SuiteNode {
    SuiteNode::new(name)
}

fn suite(name: &str, children: Vec<SuiteNode>) -> SuiteNode {
    SuiteNode::with_children(name, children)
}

fn passed(name: &str) -> CaseResult {
    CaseResult::leaf(name, Outcome::Passed)
}

mod suite_trees {
    use super::*;

    #[test]
    fn grandchild_is_invisible_without_recursion() {
        let root = suite("A", vec![case("B"), suite("C", vec![case("D")])]);

        assert!(find("D", &root, false).is_none());
        let found = find("D", &root, true).unwrap();
        assert_eq!(found.name, "D");
    }

    #[test]
    fn empty_root_never_matches() {
        let root = case("A");

        assert!(find("A", &root, false).is_none());
        assert!(find("anything", &root, true).is_none());
    }

    #[test]
    fn the_root_itself_is_not_a_candidate() {
        let root = suite("A", vec![case("B")]);

        assert!(find("A", &root, true).is_none());
    }

    #[test]
    fn returns_the_node_inside_the_tree_not_a_copy() {
        let root = suite("A", vec![case("B"), case("C")]);

        let found = find("C", &root, false).unwrap();
        assert!(ptr::eq(found, &root.children[1]));
    }

    #[test]
    fn leftmost_sibling_wins_among_duplicates() {
        let root = suite("A", vec![case("x"), case("x")]);

        let found = find("x", &root, true).unwrap();
        assert!(ptr::eq(found, &root.children[0]));
    }

    #[test]
    fn an_earlier_subtree_is_exhausted_before_a_later_sibling() {
        // Pre-order: the "x" buried under B is reached before the shallower
        // "x" that follows B.
        let root = suite("A", vec![suite("B", vec![case("x")]), case("x")]);

        let found = find("x", &root, true).unwrap();
        assert!(ptr::eq(found, &root.children[0].children[0]));
    }

    #[test]
    fn direct_match_short_circuits_descent() {
        let root = suite("A", vec![suite("x", vec![case("x")])]);

        let found = find("x", &root, true).unwrap();
        assert!(ptr::eq(found, &root.children[0]));
    }

    #[test]
    fn non_recursive_search_ignores_structure_below_children() {
        let root = suite("A", vec![case("y"), suite("B", vec![case("x")])]);

        assert!(find("x", &root, false).is_none());
        assert!(find("y", &root, false).is_some());
    }
}

mod result_trees {
    use super::*;

    #[test]
    fn finds_a_nested_result_recursively() {
        let root = CaseResult::suite(
            "run",
            Outcome::Failed {
                message: "1 of 3 failed".to_string(),
            },
            vec![
                passed("setup"),
                CaseResult::suite("integration", Outcome::Passed, vec![passed("roundtrip")]),
            ],
        );

        assert!(find("roundtrip", &root, false).is_none());
        let found = find("roundtrip", &root, true).unwrap();
        assert_eq!(found.outcome, Outcome::Passed);
    }

    #[test]
    fn absent_children_contribute_no_matches() {
        let root = CaseResult::leaf("run", Outcome::Passed);

        assert!(find("run", &root, true).is_none());
        assert!(find("anything", &root, true).is_none());
    }

    #[test]
    fn a_childless_node_acts_as_a_leaf_during_descent() {
        // "skipped-suite" never produced child results; descent must step
        // over it and keep searching the later sibling.
        let root = CaseResult::suite(
            "run",
            Outcome::Passed,
            vec![
                CaseResult::leaf(
                    "skipped-suite",
                    Outcome::Skipped {
                        reason: Some("no loopback interface".to_string()),
                    },
                ),
                CaseResult::suite("unit", Outcome::Passed, vec![passed("target")]),
            ],
        );

        let found = find("target", &root, true).unwrap();
        assert_eq!(found.name, "target");
    }

    #[test]
    fn empty_children_are_distinct_from_absent_but_search_the_same() {
        let empty = CaseResult::suite("run", Outcome::Passed, Vec::new());
        let absent = CaseResult::leaf("run", Outcome::Passed);

        assert!(empty.children.is_some());
        assert!(absent.children.is_none());
        assert!(find("x", &empty, true).is_none());
        assert!(find("x", &absent, true).is_none());
    }
}
