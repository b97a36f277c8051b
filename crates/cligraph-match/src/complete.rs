//! Breadth-first matching of an input line against the full graph.

use cligraph_core::{CommandId, Graph, NodeId, NodeKind};
use indexmap::IndexSet;

use crate::hops::next_hops;
use crate::matcher::{Filter, MatchVerdict, match_token};

/// Candidate nodes that validly follow `tokens` from `start`.
///
/// The frontier starts at `next_hops(start)` and advances once per token:
/// the new frontier is the union of next hops of every frontier node the
/// token matches exactly. An empty frontier ends the scan early, and
/// matching stops there (nothing downstream can recover).
///
/// The final token is where the two filter modes part ways:
///
/// - [`Filter::Strict`]: the uniform rule runs to the end, so after a
///   fully typed command the result holds the nodes following the last
///   word, End among them. This is the resolution path.
/// - [`Filter::Relaxed`]: the final token is the word still being typed,
///   and the result is the frontier nodes it exactly or partially matches.
///   Those are the candidates a completion UI renders, e.g. `"show ip ro"`
///   yields the `route` keyword node itself.
///
/// An empty final token (from [`tokenize_completion`](crate::tokenize_completion))
/// is presented to the matchers as the absent-token probe, so every
/// followable node answers Partial and the full candidate set comes back.
pub fn complete(
    graph: &Graph,
    start: NodeId,
    tokens: &[&str],
    filter: Filter,
) -> IndexSet<NodeId> {
    let mut frontier: IndexSet<NodeId> = next_hops(graph, start).into_iter().collect();

    for (idx, &raw) in tokens.iter().enumerate() {
        if frontier.is_empty() {
            break;
        }
        let token = if raw.is_empty() { None } else { Some(raw) };

        if filter == Filter::Relaxed && idx + 1 == tokens.len() {
            frontier.retain(|&id| match_token(graph, id, token, filter) != MatchVerdict::NoMatch);
            break;
        }

        let mut next = IndexSet::new();
        for &id in &frontier {
            if match_token(graph, id, token, filter) == MatchVerdict::Exact {
                next.extend(next_hops(graph, id));
            }
        }
        frontier = next;
    }

    frontier
}

/// Resolve a fully tokenized line to the unique command it invokes.
///
/// Runs [`complete`] and reports the command of the End node in the result,
/// if any. Well-formed grammars keep command sub-graphs disjoint past their
/// entry, so at most one End can appear; no ambiguity diagnosis is done
/// here.
pub fn resolve(
    graph: &Graph,
    start: NodeId,
    tokens: &[&str],
    filter: Filter,
) -> Option<CommandId> {
    complete(graph, start, tokens, filter)
        .into_iter()
        .find_map(|id| match graph.node(id).kind() {
            NodeKind::End(command) => Some(*command),
            _ => None,
        })
}
