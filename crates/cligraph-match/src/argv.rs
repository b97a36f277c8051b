//! Argument extraction for one command's sub-graph.
//!
//! Depth-first recursive matching with backtracking. Where several paths
//! accept the same remaining input, the immediate next hop with the most
//! specific kind wins; a tie at the best rank means the grammar itself is
//! ambiguous and the whole attempt fails. Comparing only immediate hops is
//! sound because deeper levels have already been disambiguated the same
//! way on the way back up.
//!
//! Bindings are call-local: the result pairs each consumed token with the
//! node that accepted it, and the graph is never written. Matching the
//! same line twice yields identical results, and concurrent builds over
//! one graph are safe.

use cligraph_core::{Graph, NodeId};

use crate::hops::next_hops;
use crate::matcher::{Filter, MatchVerdict, match_token};
use crate::trace::{NoopTracer, Tracer};

/// Hard cap on input tokens. Recursion depth is bounded by token count, so
/// this is also the stack guard for pathological input.
pub const MAX_LINE_TOKENS: usize = 256;

/// One bound argument: a node and the input token it accepted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Arg {
    pub node: NodeId,
    pub text: String,
}

/// Failure modes of argument building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgvError {
    /// No path through the sub-graph accepts the line. Ordinary mismatch
    /// and ambiguous grammars surface identically here; ambiguity is
    /// visible through the [`Tracer`] only.
    #[error("input line does not match the command")]
    NoMatch,

    /// Input exceeds [`MAX_LINE_TOKENS`].
    #[error("input line exceeds {MAX_LINE_TOKENS} tokens")]
    LineTooLong,
}

/// Build the ordered argument list for one command.
///
/// `entries` are the top-level nodes of the command's sub-graph (several
/// for commands with optional leading forms). Each is attempted in order
/// and the first success wins; entry keywords are deduplicated, so at most
/// one can accept the first token.
pub fn build_argv(
    graph: &Graph,
    entries: &[NodeId],
    tokens: &[&str],
) -> Result<Vec<Arg>, ArgvError> {
    build_argv_traced(graph, entries, tokens, &mut NoopTracer)
}

/// [`build_argv`] with an explicit [`Tracer`].
pub fn build_argv_traced<T: Tracer>(
    graph: &Graph,
    entries: &[NodeId],
    tokens: &[&str],
    tracer: &mut T,
) -> Result<Vec<Arg>, ArgvError> {
    if tokens.len() > MAX_LINE_TOKENS {
        return Err(ArgvError::LineTooLong);
    }
    if tokens.is_empty() {
        return Err(ArgvError::NoMatch);
    }
    entries
        .iter()
        .find_map(|&entry| match_argv_r(graph, entry, tokens, 0, tracer))
        .ok_or(ArgvError::NoMatch)
}

fn match_argv_r<T: Tracer>(
    graph: &Graph,
    id: NodeId,
    tokens: &[&str],
    index: usize,
    tracer: &mut T,
) -> Option<Vec<Arg>> {
    tracer.descend(graph, id, index, tokens[index]);

    if match_token(graph, id, Some(tokens[index]), Filter::Strict) != MatchVerdict::Exact {
        return None;
    }

    let hops = next_hops(graph, id);

    if index + 1 == tokens.len() {
        // Out of input: this path spells a command iff End is one hop away.
        let done = hops.iter().any(|&h| graph.node(h).kind().is_end());
        return done.then(|| vec![bind(id, tokens[index])]);
    }

    // Recurse on every real next hop, reducing to the most specific winner.
    // `tied` records a second candidate at the current best rank; a strictly
    // better rank clears it.
    let mut best: Option<(u8, Vec<Arg>)> = None;
    let mut tied = false;
    for hop in hops {
        if graph.node(hop).kind().is_end() {
            continue; // input remains, End cannot consume it
        }
        let Some(result) = match_argv_r(graph, hop, tokens, index + 1, tracer) else {
            continue;
        };
        let rank = graph.node(hop).kind().precedence();
        match best.as_ref().map(|(best_rank, _)| *best_rank) {
            None => {
                tracer.candidate_accepted(graph, hop, index + 1);
                best = Some((rank, result));
            }
            Some(best_rank) if rank < best_rank => {
                tracer.candidate_replaced(graph, hop, index + 1);
                best = Some((rank, result));
                tied = false;
            }
            Some(best_rank) if rank == best_rank => {
                tied = true;
            }
            Some(_) => {} // less specific, discard
        }
    }

    if tied {
        // Two siblings of equal precedence both accept the rest of the
        // line. No binding is safe to pick, so the entire call fails.
        tracer.ambiguity(graph, id, index);
        return None;
    }

    let (_, mut rest) = best?;
    rest.insert(0, bind(id, tokens[index]));
    Some(rest)
}

fn bind(node: NodeId, text: &str) -> Arg {
    Arg {
        node,
        text: text.to_string(),
    }
}
