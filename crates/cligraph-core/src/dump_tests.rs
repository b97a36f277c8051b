use super::dump::{describe, dump, to_json};
use super::graph::{Graph, Node};
use super::kind::{CommandId, NodeKind};

#[test]
fn describe_renders_payloads() {
    let mut graph = Graph::new();
    let root = graph.root();
    let word = graph.add_child(root, Node::word("show"));
    let range = graph.add_child(root, Node::range(1, 4094));
    let var = graph.add_child(root, Node::variable("IFNAME"));
    let end = graph.add_child(root, Node::end(CommandId::from_raw(7)));

    assert_eq!(describe(&graph, root), "NUL");
    assert_eq!(describe(&graph, word), "WORD \"show\"");
    assert_eq!(describe(&graph, range), "RANGE <1-4094>");
    assert_eq!(describe(&graph, var), "VARIABLE IFNAME");
    assert_eq!(describe(&graph, end), "END #7");
}

#[test]
fn dump_indents_by_depth() {
    let mut graph = Graph::new();
    let root = graph.root();
    let show = graph.add_child(root, Node::word("show"));
    graph.add_child(show, Node::word("ip"));

    let text = dump(&graph, root);
    assert_eq!(text, "NUL\n  WORD \"show\"\n    WORD \"ip\"\n");
}

#[test]
fn dump_marks_shared_subgraphs() {
    let mut graph = Graph::new();
    let root = graph.root();
    let shared = graph.insert(Node::word("detail"));
    let a = graph.add_child(root, Node::word("a"));
    let b = graph.add_child(root, Node::word("b"));
    graph.add_child_id(a, shared);
    graph.add_child_id(b, shared);

    let text = dump(&graph, root);
    // Printed in full once, then referenced with the marker.
    assert_eq!(text.matches("WORD \"detail\"\n").count(), 1);
    assert_eq!(text.matches("WORD \"detail\" *\n").count(), 1);
}

#[test]
fn json_captures_structure() {
    let mut graph = Graph::new();
    let root = graph.root();
    let show = graph.add_child(root, Node::word("show"));
    graph.set_start(show);
    graph.add_child(show, Node::new(NodeKind::Ipv4));

    let value = to_json(&graph, root);
    assert_eq!(value["id"], 0);
    let show_json = &value["children"][0];
    assert_eq!(show_json["is_start"], true);
    assert_eq!(show_json["kind"]["Word"], "show");
    assert_eq!(show_json["children"][0]["kind"], "Ipv4");
}

#[test]
fn json_renders_shared_nodes_as_refs() {
    let mut graph = Graph::new();
    let root = graph.root();
    let shared = graph.insert(Node::word("detail"));
    let a = graph.add_child(root, Node::word("a"));
    let b = graph.add_child(root, Node::word("b"));
    graph.add_child_id(a, shared);
    graph.add_child_id(b, shared);

    let value = to_json(&graph, root);
    let first = &value["children"][0]["children"][0];
    let second = &value["children"][1]["children"][0];
    assert_eq!(first["id"], shared.as_u32());
    assert_eq!(second["ref"], shared.as_u32());
}
