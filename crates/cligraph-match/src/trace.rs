//! Trace hook for the argument builder.
//!
//! The builder reports its recursion through a [`Tracer`] rather than
//! printing. [`NoopTracer`] is the default: every method is an
//! `#[inline(always)]` empty body the compiler removes, so the untraced
//! path pays nothing. [`PrintTracer`] writes indented lines to stderr for
//! debugging a grammar by hand.

use cligraph_core::{Graph, NodeId, describe};

/// Instrumentation points of [`build_argv`](crate::build_argv).
pub trait Tracer {
    /// The builder descends into `node` for the token at `index`.
    fn descend(&mut self, graph: &Graph, node: NodeId, index: usize, token: &str);

    /// A recursive result became the current best candidate.
    fn candidate_accepted(&mut self, graph: &Graph, node: NodeId, index: usize);

    /// A more specific candidate replaced the current best.
    fn candidate_replaced(&mut self, graph: &Graph, node: NodeId, index: usize);

    /// Two candidates tied at the best precedence rank; the grammar is
    /// ambiguous and the whole attempt is abandoned.
    fn ambiguity(&mut self, graph: &Graph, node: NodeId, index: usize);
}

/// Tracer that does nothing; optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn descend(&mut self, _graph: &Graph, _node: NodeId, _index: usize, _token: &str) {}

    #[inline(always)]
    fn candidate_accepted(&mut self, _graph: &Graph, _node: NodeId, _index: usize) {}

    #[inline(always)]
    fn candidate_replaced(&mut self, _graph: &Graph, _node: NodeId, _index: usize) {}

    #[inline(always)]
    fn ambiguity(&mut self, _graph: &Graph, _node: NodeId, _index: usize) {}
}

/// Tracer that writes indented recursion lines to stderr.
pub struct PrintTracer;

impl PrintTracer {
    fn indent(index: usize) -> String {
        "  ".repeat(index)
    }
}

impl Tracer for PrintTracer {
    fn descend(&mut self, graph: &Graph, node: NodeId, index: usize, token: &str) {
        eprintln!(
            "{}{} <- {token:?}",
            Self::indent(index),
            describe(graph, node)
        );
    }

    fn candidate_accepted(&mut self, graph: &Graph, node: NodeId, index: usize) {
        eprintln!(
            "{}best := {}",
            Self::indent(index),
            describe(graph, node)
        );
    }

    fn candidate_replaced(&mut self, graph: &Graph, node: NodeId, index: usize) {
        eprintln!(
            "{}best <- {} (more specific)",
            Self::indent(index),
            describe(graph, node)
        );
    }

    fn ambiguity(&mut self, graph: &Graph, node: NodeId, index: usize) {
        eprintln!(
            "{}ambiguous under {}, aborting",
            Self::indent(index),
            describe(graph, node)
        );
    }
}
