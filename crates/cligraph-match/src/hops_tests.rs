use cligraph_core::{Graph, Node, NodeKind};

use super::hops::next_hops;

#[test]
fn direct_children_in_order() {
    let mut graph = Graph::new();
    let root = graph.root();
    let show = graph.add_child(root, Node::word("show"));
    let clear = graph.add_child(root, Node::word("clear"));

    assert_eq!(next_hops(&graph, root), vec![show, clear]);
}

#[test]
fn structural_children_are_transparent() {
    // root -> OPTION -> SELECTOR -> NUL -> "deep", plus a real sibling.
    let mut graph = Graph::new();
    let root = graph.root();
    let option = graph.add_child(root, Node::new(NodeKind::Option));
    let selector = graph.add_child(option, Node::new(NodeKind::Selector));
    let nul = graph.add_child(selector, Node::new(NodeKind::Nul));
    let deep = graph.add_child(nul, Node::word("deep"));
    let flat = graph.add_child(root, Node::word("flat"));

    assert_eq!(next_hops(&graph, root), vec![deep, flat]);
}

#[test]
fn dead_end_is_empty() {
    let mut graph = Graph::new();
    let root = graph.root();
    let option = graph.add_child(root, Node::new(NodeKind::Option));
    graph.add_child(option, Node::new(NodeKind::Nul));

    assert!(next_hops(&graph, root).is_empty());
}

#[test]
fn converging_paths_are_deduplicated() {
    // Two selector branches rejoin on the same real node.
    let mut graph = Graph::new();
    let root = graph.root();
    let detail = graph.insert(Node::word("detail"));
    let left = graph.add_child(root, Node::new(NodeKind::Selector));
    let right = graph.add_child(root, Node::new(NodeKind::Option));
    graph.add_child_id(left, detail);
    graph.add_child_id(right, detail);

    assert_eq!(next_hops(&graph, root), vec![detail]);
}

#[test]
fn structural_cycle_terminates() {
    // Malformed wiring: two structural nodes referencing each other.
    let mut graph = Graph::new();
    let root = graph.root();
    let a = graph.add_child(root, Node::new(NodeKind::Nul));
    let b = graph.insert(Node::new(NodeKind::Selector));
    graph.add_child_id(a, b);
    graph.add_child_id(b, a);
    let word = graph.insert(Node::word("escape"));
    graph.add_child_id(b, word);

    assert_eq!(next_hops(&graph, root), vec![word]);
}
