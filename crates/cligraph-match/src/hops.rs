//! Epsilon closure over structural nodes.

use std::collections::HashSet;

use cligraph_core::{Graph, NodeId, NodeKind};

/// Nodes reachable from `id` by consuming exactly one input token.
///
/// Option, Selector, and Nul children are transparent: traversal expands
/// through them and only real (matchable or End) nodes are emitted, in
/// child insertion order. Converging structural paths can reach the same
/// real node twice; duplicates are filtered. The result may legitimately be
/// empty (dead end).
///
/// A well-formed graph is acyclic, but the arena makes cycles
/// representable, so traversal carries a visited set and cuts a malformed
/// structural loop short instead of recursing forever.
pub fn next_hops(graph: &Graph, id: NodeId) -> Vec<NodeId> {
    let mut hops = Vec::new();
    let mut visited = HashSet::new();
    collect(graph, id, &mut visited, &mut hops);
    hops
}

fn collect(graph: &Graph, id: NodeId, visited: &mut HashSet<NodeId>, hops: &mut Vec<NodeId>) {
    if !visited.insert(id) {
        return; // structural cycle
    }
    for &child in graph.children(id) {
        match graph.node(child).kind() {
            NodeKind::Option | NodeKind::Selector | NodeKind::Nul => {
                collect(graph, child, visited, hops);
            }
            _ => {
                if !hops.contains(&child) {
                    hops.push(child);
                }
            }
        }
    }
}
