//! Diagnostic rendition of a graph.
//!
//! Debug tooling only: the matching engine never depends on anything here.

use std::collections::HashSet;

use serde_json::{Value, json};

use crate::graph::{Graph, NodeId};
use crate::kind::NodeKind;

/// One-line description of a node.
pub fn describe(graph: &Graph, id: NodeId) -> String {
    match graph.node(id).kind() {
        NodeKind::Ipv4 => "IPV4".to_string(),
        NodeKind::Ipv4Prefix => "IPV4-PREFIX".to_string(),
        NodeKind::Ipv6 => "IPV6".to_string(),
        NodeKind::Ipv6Prefix => "IPV6-PREFIX".to_string(),
        NodeKind::Word(text) => format!("WORD \"{text}\""),
        NodeKind::Range { min, max } => format!("RANGE <{min}-{max}>"),
        NodeKind::Number(value) => format!("NUMBER {value}"),
        NodeKind::Variable(name) => format!("VARIABLE {name}"),
        NodeKind::Selector => "SELECTOR".to_string(),
        NodeKind::Option => "OPTION".to_string(),
        NodeKind::Nul => "NUL".to_string(),
        NodeKind::Start => "START".to_string(),
        NodeKind::End(command) => format!("END #{}", command.as_u32()),
    }
}

/// Indented tree walk from `id`, one node per line.
///
/// Shared sub-graphs are printed once; later visits render the node with a
/// `*` marker and stop.
pub fn dump(graph: &Graph, id: NodeId) -> String {
    let mut out = String::new();
    let mut seen = HashSet::new();
    walk(graph, id, 0, &mut seen, &mut out);
    out
}

fn walk(graph: &Graph, id: NodeId, depth: usize, seen: &mut HashSet<NodeId>, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&describe(graph, id));
    if !seen.insert(id) {
        out.push_str(" *\n");
        return;
    }
    out.push('\n');
    for &child in graph.children(id) {
        walk(graph, child, depth + 1, seen, out);
    }
}

/// Structured rendition for tooling.
///
/// Nodes are emitted depth-first; a node already emitted appears as
/// `{"ref": id}` so shared structure stays visible without duplication.
pub fn to_json(graph: &Graph, id: NodeId) -> Value {
    let mut seen = HashSet::new();
    node_json(graph, id, &mut seen)
}

fn node_json(graph: &Graph, id: NodeId, seen: &mut HashSet<NodeId>) -> Value {
    if !seen.insert(id) {
        return json!({ "ref": id.as_u32() });
    }
    let node = graph.node(id);
    let children: Vec<Value> = node
        .children()
        .iter()
        .map(|&child| node_json(graph, child, seen))
        .collect();
    json!({
        "id": id.as_u32(),
        "kind": serde_json::to_value(node.kind()).unwrap_or(Value::Null),
        "is_start": node.is_start(),
        "end": node.end_link().map(NodeId::as_u32),
        "children": children,
    })
}
