//! Tests for GenericTree: sorted insertion, fixed slots, search and printing

use gentree::cli::commands::demo_tree;
use gentree::util::testing::init_test_setup;
use gentree::{Arity, GenericTree, NodeId, PrintOptions, TreeError};
use rstest::{fixture, rstest};

/// Tree from the reference scenario: 1 -> {2,3,5,6,7,8}, 3 -> {4}.
#[fixture]
fn sorted_tree() -> GenericTree<i64> {
    init_test_setup();
    demo_tree().expect("demo tree builds")
}

fn child_values(tree: &GenericTree<i64>, id: NodeId) -> Vec<i64> {
    tree.children(id).map(|(_, node)| *node.data()).collect()
}

// ============================================================
// Sorted Insertion Tests
// ============================================================

#[rstest]
fn given_sorted_inserts_when_building_then_root_children_are_ascending(sorted_tree: GenericTree<i64>) {
    let root = sorted_tree.root().unwrap();

    assert_eq!(child_values(&sorted_tree, root), vec![2, 3, 5, 6, 7, 8]);
}

#[rstest]
fn given_sorted_inserts_when_building_then_four_sits_below_three(sorted_tree: GenericTree<i64>) {
    // Act
    let four = sorted_tree.search(&4).expect("4 is in the tree");

    // Assert
    let parent = sorted_tree.parent(four).unwrap();
    assert_eq!(sorted_tree.get(parent), Some(&3));
    assert_eq!(sorted_tree.is_leaf(four), Some(true));
}

#[rstest]
#[case(vec![5, 1, 4, 1, 3], vec![1, 1, 3, 4, 5])]
#[case(vec![9, 8, 7], vec![7, 8, 9])]
#[case(vec![], vec![])]
fn given_values_when_sorted_inserting_then_children_are_sorted(
    #[case] values: Vec<i64>,
    #[case] expected: Vec<i64>,
) {
    let mut tree = GenericTree::with_root(Arity::Unbounded, 0);
    let root = tree.root().unwrap();

    for v in values {
        tree.insert_child(root, v, true).unwrap();
    }

    assert_eq!(child_values(&tree, root), expected);
}

// ============================================================
// Search Tests
// ============================================================

#[rstest]
fn given_sorted_tree_when_searching_then_finds_four_but_not_nine(sorted_tree: GenericTree<i64>) {
    assert!(sorted_tree.search(&4).is_some());
    assert!(sorted_tree.search(&9).is_none());
}

#[test]
fn given_empty_tree_when_searching_then_not_found() {
    let tree: GenericTree<i64> = GenericTree::new();

    assert_eq!(tree.search(&1), None);
}

#[rstest]
fn given_subtree_when_searching_from_it_then_ignores_siblings(sorted_tree: GenericTree<i64>) {
    let three = sorted_tree.search(&3).unwrap();

    assert!(sorted_tree.search_from(three, &4).is_some());
    assert!(sorted_tree.search_from(three, &5).is_none());
}

// ============================================================
// Removal Tests
// ============================================================

#[rstest]
fn given_node_with_subtree_when_removing_then_descendants_are_gone(mut sorted_tree: GenericTree<i64>) {
    // Arrange
    let root = sorted_tree.root().unwrap();
    let nodes_before = sorted_tree.len();

    // Act
    let removed = sorted_tree.remove_child_at(root, 1);

    // Assert
    assert_eq!(removed, Some(3));
    assert!(sorted_tree.search(&3).is_none());
    assert!(sorted_tree.search(&4).is_none());
    assert_eq!(sorted_tree.len(), nodes_before - 2);
    assert_eq!(child_values(&sorted_tree, root), vec![2, 5, 6, 7, 8]);
}

#[rstest]
fn given_invalid_index_when_removing_then_nothing_changes(mut sorted_tree: GenericTree<i64>) {
    let root = sorted_tree.root().unwrap();
    let before = sorted_tree.to_string();

    assert_eq!(sorted_tree.remove_child_at(root, 99), None);
    assert_eq!(sorted_tree.to_string(), before);
}

// ============================================================
// Fixed Arity Tests
// ============================================================

#[test]
fn given_binary_tree_when_inserting_at_index_two_then_fails() {
    // Arrange
    let mut tree = GenericTree::with_root(Arity::from_capacity(2), 1);
    let root = tree.root().unwrap();
    tree.insert_child_at(root, 2, 0).unwrap();

    // Act
    let beyond = tree.insert_child_at(root, 3, 2);
    let occupied = tree.insert_child_at(root, 3, 0);
    let vacant = tree.insert_child_at(root, 3, 1);

    // Assert
    assert_eq!(beyond, Err(TreeError::IndexOutOfBounds { index: 2, bound: 2 }));
    assert_eq!(occupied, Err(TreeError::SlotOccupied(0)));
    assert!(vacant.is_ok());
    assert_eq!(tree.child_count(root), Some(2));
}

#[test]
fn given_fixed_tree_when_inserting_without_index_then_arity_mismatch() {
    let mut tree = GenericTree::with_root(Arity::from_capacity(2), 1);
    let root = tree.root().unwrap();

    assert_eq!(
        tree.insert_child(root, 2, false),
        Err(TreeError::ArityMismatch { capacity: 2 })
    );
    assert_eq!(tree.child_count(root), Some(0));
}

#[test]
fn given_fixed_slot_removed_when_reinserting_then_count_is_restored() {
    let mut tree = GenericTree::with_root(Arity::from_capacity(3), 'a');
    let root = tree.root().unwrap();
    tree.insert_child_at(root, 'b', 1).unwrap();
    tree.insert_child_at(root, 'c', 2).unwrap();

    assert_eq!(tree.remove_child_at(root, 1), Some('b'));
    assert_eq!(tree.child_count(root), Some(1));

    tree.insert_child_at(root, 'd', 1).unwrap();
    assert_eq!(tree.child_count(root), Some(2));
    assert_eq!(tree.child_at(root, 1).and_then(|id| tree.get(id)), Some(&'d'));
}

#[rstest]
#[case(0)]
#[case(-3)]
fn given_non_positive_capacity_when_creating_then_tree_is_unbounded(#[case] capacity: i64) {
    let mut tree = GenericTree::with_capacity(capacity);
    let root = tree.set_root(1).unwrap();

    assert_eq!(tree.arity(), Arity::Unbounded);
    for v in 0..10 {
        tree.insert_child(root, v, false).unwrap();
    }
    assert_eq!(tree.child_count(root), Some(10));
}

// ============================================================
// Printing Tests
// ============================================================

#[rstest]
fn given_sorted_tree_when_rendering_then_matches_indented_layout(sorted_tree: GenericTree<i64>) {
    let expected = "\
1
   2
   3
      4
   5
   6
   7
   8
";
    assert_eq!(sorted_tree.render(&PrintOptions::default()), expected);
}

#[test]
fn given_fixed_tree_with_hole_when_rendering_then_hole_prints_null() {
    let mut tree = GenericTree::with_root(Arity::from_capacity(2), 1);
    let root = tree.root().unwrap();
    let right = tree.insert_child_at(root, 3, 1).unwrap();
    tree.insert_child_at(right, 4, 0).unwrap();

    assert_eq!(tree.to_string(), "1\n   null\n   3\n      4\n      null\n");
}

#[test]
fn given_writer_when_writing_then_output_matches_render() {
    let tree = demo_tree().unwrap();
    let options = PrintOptions {
        indent_width: 1,
        ..PrintOptions::default()
    };
    let mut buf = Vec::new();

    tree.write_to(&mut buf, &options).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), tree.render(&options));
    assert!(tree.render(&options).contains("\n  4\n"));
}

// ============================================================
// Deep Tree Tests
// ============================================================

/// Fixed arity 1 degenerates into a linked list `0 -> 1 -> ... -> len-1`.
fn chain(len: i64) -> GenericTree<i64> {
    let mut tree = GenericTree::with_root(Arity::from_capacity(1), 0);
    let mut current = tree.root().unwrap();
    for value in 1..len {
        current = tree.insert_child_at(current, value, 0).unwrap();
    }
    tree
}

#[test]
fn given_deep_chain_when_searching_then_walks_every_level() {
    let tree = chain(150_000);

    assert_eq!(tree.search(&-1), None);
    let last = tree.search(&149_999).expect("tail is reachable");
    assert_eq!(tree.is_leaf(last), Some(true));
    let head = tree.root().unwrap();
    assert_eq!(tree.search_from(head, &75_000).and_then(|id| tree.get(id)), Some(&75_000));
}

#[test]
fn given_deep_chain_when_measuring_depth_then_counts_every_level() {
    let tree = chain(150_000);

    assert_eq!(tree.depth(), 150_000);
}

#[test]
fn given_deep_chain_when_rendering_then_prints_one_line_per_node() {
    let tree = chain(150_000);
    // zero indent keeps the output linear in the chain length
    let flat = PrintOptions {
        indent_width: 0,
        ..PrintOptions::default()
    };

    let rendered = tree.render(&flat);

    assert_eq!(rendered.lines().count(), 150_000);
    assert!(rendered.starts_with("0\n1\n2\n"));
    assert!(rendered.ends_with("\n149999\n"));
}
