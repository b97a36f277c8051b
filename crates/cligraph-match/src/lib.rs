//! Matching engine for the shared command DFA.
//!
//! Three read-only consumers of one [`cligraph_core::Graph`]:
//!
//! - [`complete`] walks the graph breadth-first, token by token, and
//!   returns the frontier: the nodes that validly follow the input so far.
//!   Drives tab completion and help text.
//! - [`resolve`] runs the same walk and reports the unique command a fully
//!   typed line invokes, if any.
//! - [`build_argv`] walks a single command's sub-graph depth-first with
//!   backtracking and returns the ordered argument bindings, using
//!   precedence to disambiguate and refusing ambiguous grammars.
//!
//! All entry points take `&Graph` and keep their scratch state call-local,
//! so concurrent matches over one registered command set are safe.

mod argv;
mod complete;
mod hops;
mod matcher;
mod token;
mod trace;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod hops_tests;

pub use argv::{Arg, ArgvError, MAX_LINE_TOKENS, build_argv, build_argv_traced};
pub use complete::{complete, resolve};
pub use hops::next_hops;
pub use matcher::{Filter, MatchVerdict, match_token};
pub use token::{tokenize, tokenize_completion};
pub use trace::{NoopTracer, PrintTracer, Tracer};
