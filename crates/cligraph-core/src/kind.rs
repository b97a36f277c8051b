//! Node kinds of the command DFA.

use serde::{Deserialize, Serialize};

/// Lightweight handle to a command definition in the dispatch layer.
///
/// Carried only by [`NodeKind::End`]. When a line resolves to a complete
/// command, this is what the matcher hands back; the dispatch layer maps it
/// to the registered callback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CommandId(u32);

impl CommandId {
    /// Create a CommandId from a raw index.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// What a node accepts, or, for structural kinds, how it shapes the graph.
///
/// One variant per state kind of the DFA, payload inline. Matcher dispatch,
/// equivalence, and precedence are all exhaustive matches over this type, so
/// adding a kind is a compile error until every engine handles it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NodeKind {
    /// Dotted-quad IPv4 address, e.g. `10.0.0.1`.
    Ipv4,
    /// IPv4 address with `/mask`, mask in `[0, 32]`.
    Ipv4Prefix,
    /// IPv6 address.
    Ipv6,
    /// IPv6 address with `/mask`, mask in `[0, 128]`.
    Ipv6Prefix,
    /// Literal keyword.
    Word(String),
    /// Signed integer whose magnitude must fall in `[min, max]`.
    Range { min: i64, max: i64 },
    /// One specific integer literal.
    Number(i64),
    /// Free-form identifier token; the name is only for display.
    Variable(String),
    /// Head of an alternation group. Structural only.
    Selector,
    /// Head of an optional group. Structural only.
    Option,
    /// Sequencing glue. Structural only.
    Nul,
    /// Entry marker. Structural only.
    Start,
    /// Terminal; reaching it completes the referenced command.
    End(CommandId),
}

impl NodeKind {
    /// Parsing equivalence: would a single input token match these two
    /// kinds indistinguishably?
    ///
    /// Same kind plus same kind-specific payload. The command reference on
    /// `End` is deliberately excluded: a node is about what input it
    /// accepts, not what happens when it is reached. This is the relation
    /// [`Graph::add_child`](crate::Graph::add_child) deduplicates under,
    /// which is why it is looser than `==`.
    pub fn equivalent(&self, other: &NodeKind) -> bool {
        match (self, other) {
            (NodeKind::Word(a), NodeKind::Word(b)) => a == b,
            (NodeKind::Variable(a), NodeKind::Variable(b)) => a == b,
            (NodeKind::Number(a), NodeKind::Number(b)) => a == b,
            (
                NodeKind::Range { min: a_min, max: a_max },
                NodeKind::Range { min: b_min, max: b_max },
            ) => a_min == b_min && a_max == b_max,
            (NodeKind::Ipv4, NodeKind::Ipv4)
            | (NodeKind::Ipv4Prefix, NodeKind::Ipv4Prefix)
            | (NodeKind::Ipv6, NodeKind::Ipv6)
            | (NodeKind::Ipv6Prefix, NodeKind::Ipv6Prefix)
            | (NodeKind::Selector, NodeKind::Selector)
            | (NodeKind::Option, NodeKind::Option)
            | (NodeKind::Nul, NodeKind::Nul)
            | (NodeKind::Start, NodeKind::Start)
            | (NodeKind::End(_), NodeKind::End(_)) => true,
            _ => false,
        }
    }

    /// Whether this kind encodes grammar shape rather than matchable input.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            NodeKind::Selector | NodeKind::Option | NodeKind::Nul | NodeKind::Start
        )
    }

    /// Whether this kind terminates a command path.
    pub fn is_end(&self) -> bool {
        matches!(self, NodeKind::End(_))
    }

    /// Specificity rank for disambiguating sibling matches. Lower wins.
    ///
    /// Value-shaped kinds outrank keywords, keywords outrank free-form
    /// variables. Structural kinds and `End` never compete and rank last.
    pub fn precedence(&self) -> u8 {
        match self {
            NodeKind::Ipv4
            | NodeKind::Ipv4Prefix
            | NodeKind::Ipv6
            | NodeKind::Ipv6Prefix
            | NodeKind::Range { .. }
            | NodeKind::Number(_) => 1,
            NodeKind::Word(_) => 2,
            NodeKind::Variable(_) => 3,
            NodeKind::Selector
            | NodeKind::Option
            | NodeKind::Nul
            | NodeKind::Start
            | NodeKind::End(_) => 10,
        }
    }
}
