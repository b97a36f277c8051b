//! Shared command-DFA graph for CLI grammars.
//!
//! A registered command set is one deduplicated graph. Each node matches a
//! single input token (keyword, number, address, ...) or encodes grammar
//! structure (alternation, optionality, sequencing). Commands that share a
//! prefix share nodes, so the graph stays minimal as commands are
//! registered.
//!
//! This crate owns the data layer: node kinds, the arena-backed graph with
//! structural deduplication, and diagnostic dumps. The matching and
//! argument-binding engines live in `cligraph-match`.

mod dump;
mod graph;
mod kind;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod graph_tests;

pub use dump::{describe, dump, to_json};
pub use graph::{Graph, Node, NodeId};
pub use kind::{CommandId, NodeKind};
