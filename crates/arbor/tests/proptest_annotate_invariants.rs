//! Property tests for annotation invariants over generated trees.

use arbor::*;
use proptest::prelude::*;
use serde_json::{json, Value};

/// Trees of up to a few levels, with a mix of absent, null and empty children.
fn arb_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        "[a-z]{1,6}".prop_map(|name| json!({ "name": name })),
        "[a-z]{1,6}".prop_map(|name| json!({ "name": name, "children": [] })),
        "[a-z]{1,6}".prop_map(|name| json!({ "name": name, "children": null })),
    ];
    leaf.prop_recursive(5, 96, 6, |inner| {
        ("[a-z]{1,6}", prop::collection::vec(inner, 0..6), any::<u8>()).prop_map(
            |(name, children, size)| json!({ "name": name, "size": size, "children": children }),
        )
    })
}

fn count_nodes(tree: &Value) -> usize {
    let keys = FieldKeys::default();
    NodeView::new(tree, &keys).pre_order().count()
}

proptest! {
    #[test]
    fn num_leafs_equals_direct_child_count(mut tree in arb_tree()) {
        annotate(&mut tree, &AnnotateConfig::new()).unwrap();

        let keys = FieldKeys::default();
        for node in NodeView::new(&tree, &keys).pre_order() {
            prop_assert_eq!(node.num_leafs(), Some(node.children().len() as u64));
            prop_assert_eq!(node.id(), None);
        }
    }

    #[test]
    fn ids_are_contiguous_pre_order(mut tree in arb_tree()) {
        let report = annotate(&mut tree, &AnnotateConfig::with_ids()).unwrap();

        let keys = FieldKeys::default();
        let ids: Vec<Option<u64>> = NodeView::new(&tree, &keys)
            .pre_order()
            .map(|node| node.id())
            .collect();
        let expected: Vec<Option<u64>> = (0..report.nodes as u64).map(Some).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn report_matches_tree(mut tree in arb_tree()) {
        let report = annotate(&mut tree, &AnnotateConfig::new()).unwrap();

        let keys = FieldKeys::default();
        let leaves = NodeView::new(&tree, &keys)
            .pre_order()
            .filter(|node| node.is_leaf())
            .count();
        prop_assert_eq!(report.nodes, count_nodes(&tree));
        prop_assert_eq!(report.leaves, leaves);
    }

    #[test]
    fn annotation_without_ids_is_idempotent(tree in arb_tree()) {
        let config = AnnotateConfig::new();
        let once = annotated(tree, &config).unwrap();
        let twice = annotated(once.clone(), &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn id_annotation_restarts_from_zero(tree in arb_tree()) {
        let config = AnnotateConfig::with_ids();
        let once = annotated(tree, &config).unwrap();
        let twice = annotated(once.clone(), &config).unwrap();
        prop_assert_eq!(once, twice);
    }
}
