//! Graph fixtures shared across engine tests.

use cligraph_core::{CommandId, Graph, Node, NodeId, NodeKind};

/// `show ip route A.B.C.D` as a single registered command.
///
/// Returns the graph, the command id, and the ids of the `route` keyword
/// node and the address node for assertions.
pub(crate) fn route_graph() -> (Graph, CommandId, NodeId, NodeId) {
    let mut graph = Graph::new();
    let root = graph.root();
    let command = CommandId::from_raw(1);

    let show = graph.add_child(root, Node::word("show"));
    graph.set_start(show);
    let ip = graph.add_child(show, Node::word("ip"));
    let route = graph.add_child(ip, Node::word("route"));
    let addr = graph.add_child(route, Node::new(NodeKind::Ipv4));
    graph.add_child(addr, Node::end(command));

    (graph, command, route, addr)
}
