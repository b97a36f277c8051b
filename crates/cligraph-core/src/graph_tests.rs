use super::graph::{Graph, Node};
use super::kind::{CommandId, NodeKind};

#[test]
fn root_is_nul() {
    let graph = Graph::new();
    assert_eq!(graph.len(), 1);
    assert!(matches!(graph.node(graph.root()).kind(), NodeKind::Nul));
}

#[test]
fn add_child_appends_new_node() {
    let mut graph = Graph::new();
    let root = graph.root();
    let show = graph.add_child(root, Node::word("show"));
    assert_eq!(graph.children(root), &[show]);
    assert!(matches!(graph.node(show).kind(), NodeKind::Word(t) if t == "show"));
}

#[test]
fn add_child_dedups_equivalent_sibling() {
    let mut graph = Graph::new();
    let root = graph.root();
    let first = graph.add_child(root, Node::word("show"));
    let second = graph.add_child(root, Node::word("show"));
    assert_eq!(first, second);
    assert_eq!(graph.children(root).len(), 1);
    assert_eq!(graph.len(), 2); // root + one child, candidate never inserted
}

#[test]
fn add_child_keeps_distinct_siblings() {
    let mut graph = Graph::new();
    let root = graph.root();
    let show = graph.add_child(root, Node::word("show"));
    let clear = graph.add_child(root, Node::word("clear"));
    assert_ne!(show, clear);
    assert_eq!(graph.children(root), &[show, clear]);
}

#[test]
fn dedup_uses_equivalence_not_equality() {
    // Two END nodes for different commands are parsing-equivalent, so the
    // second registration lands on the first node.
    let mut graph = Graph::new();
    let root = graph.root();
    let first = graph.add_child(root, Node::end(CommandId::from_raw(1)));
    let second = graph.add_child(root, Node::end(CommandId::from_raw(2)));
    assert_eq!(first, second);
    assert!(matches!(
        graph.node(first).kind(),
        NodeKind::End(c) if c.as_u32() == 1
    ));
}

#[test]
fn shared_prefix_collapses() {
    // "show ip route" and "show ip ospf" share the first two nodes.
    let mut graph = Graph::new();
    let root = graph.root();

    let show_a = graph.add_child(root, Node::word("show"));
    let ip_a = graph.add_child(show_a, Node::word("ip"));
    graph.add_child(ip_a, Node::word("route"));

    let show_b = graph.add_child(root, Node::word("show"));
    let ip_b = graph.add_child(show_b, Node::word("ip"));
    graph.add_child(ip_b, Node::word("ospf"));

    assert_eq!(show_a, show_b);
    assert_eq!(ip_a, ip_b);
    assert_eq!(graph.children(ip_a).len(), 2);
}

#[test]
fn add_child_id_converges_paths() {
    let mut graph = Graph::new();
    let root = graph.root();
    let tail = graph.insert(Node::word("detail"));
    let a = graph.add_child(root, Node::word("a"));
    let b = graph.add_child(root, Node::word("b"));
    graph.add_child_id(a, tail);
    graph.add_child_id(b, tail);
    graph.add_child_id(b, tail); // second attach is a no-op
    assert_eq!(graph.children(a), &[tail]);
    assert_eq!(graph.children(b), &[tail]);
}

#[test]
fn end_link_is_recorded() {
    let mut graph = Graph::new();
    let root = graph.root();
    let selector = graph.add_child(root, Node::new(NodeKind::Selector));
    let tail = graph.insert(Node::new(NodeKind::Nul));
    graph.link_end(selector, tail);
    assert_eq!(graph.node(selector).end_link(), Some(tail));
    assert_eq!(graph.node(root).end_link(), None);
}

#[test]
fn set_start_marks_entry_point() {
    let mut graph = Graph::new();
    let root = graph.root();
    let show = graph.add_child(root, Node::word("show"));
    assert!(!graph.node(show).is_start());
    graph.set_start(show);
    assert!(graph.node(show).is_start());
}
