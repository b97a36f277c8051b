//! Arena-backed command graph with structural deduplication.

use crate::kind::NodeKind;

/// Handle to a node in a [`Graph`] arena.
///
/// Comparing two ids is O(1). Ids are only meaningful against the graph
/// that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a NodeId from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One state of the command DFA.
#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    is_start: bool,
    children: Vec<NodeId>,
    /// Link to the node after a Selector/Option region. Written by the
    /// grammar compiler while assembling the region, never read during
    /// matching. Non-owning: the arena owns every node.
    end: Option<NodeId>,
}

impl Node {
    /// Create a node of the given kind with no children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            is_start: false,
            children: Vec::new(),
            end: None,
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Word(text.into()))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Variable(name.into()))
    }

    pub fn number(value: i64) -> Self {
        Self::new(NodeKind::Number(value))
    }

    pub fn range(min: i64, max: i64) -> Self {
        Self::new(NodeKind::Range { min, max })
    }

    pub fn end(command: crate::kind::CommandId) -> Self {
        Self::new(NodeKind::End(command))
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Whether this node is a valid entry point of a command sub-graph.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The Selector/Option region tail, if one was recorded.
    #[inline]
    pub fn end_link(&self) -> Option<NodeId> {
        self.end
    }
}

/// The shared command graph.
///
/// Nodes live in an append-only arena addressed by [`NodeId`], so the
/// cross-links a grammar needs (shared suffixes, region tails) are plain
/// indices and teardown is dropping the arena. The graph is built once by
/// the grammar compiler, then read concurrently by any number of matches.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Create a graph holding only the shared Nul root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Nul)],
        }
    }

    /// The shared root every command sub-graph hangs off.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Insert a free-standing node, returning its id.
    ///
    /// Most construction goes through [`Graph::add_child`]; this is for
    /// nodes linked up later (region tails, detached entry points).
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Attach `candidate` under `parent`, deduplicating structurally.
    ///
    /// If `parent` already has a child whose kind is
    /// [equivalent](NodeKind::equivalent) to the candidate's, that child's
    /// id is returned and the candidate is dropped. Otherwise the candidate
    /// is inserted and appended to `parent`'s children. This is the sole
    /// structural mutation entry point, and it is what keeps the DFA
    /// minimal: every command starting with the same keyword funnels
    /// through one node.
    ///
    /// # Panics
    /// Panics if `parent` is not from this graph.
    pub fn add_child(&mut self, parent: NodeId, candidate: Node) -> NodeId {
        let existing = self.nodes[parent.index()]
            .children
            .iter()
            .copied()
            .find(|c| self.nodes[c.index()].kind.equivalent(&candidate.kind));
        if let Some(id) = existing {
            return id;
        }
        let id = self.insert(candidate);
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Attach an existing node under `parent` without inserting a new one.
    ///
    /// Used by the grammar compiler to converge paths (e.g. every branch of
    /// a selector rejoins the region tail). No dedup: the caller is wiring
    /// explicit structure.
    pub fn add_child_id(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.nodes[parent.index()].children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Record the region tail on a Selector/Option node.
    pub fn link_end(&mut self, node: NodeId, end: NodeId) {
        self.nodes[node.index()].end = Some(end);
    }

    /// Mark a node as a valid entry point of a command sub-graph.
    pub fn set_start(&mut self, node: NodeId) {
        self.nodes[node.index()].is_start = true;
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if the id is not from this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Children of a node, in insertion order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
