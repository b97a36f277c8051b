//! Per-kind token matchers.
//!
//! Each matcher is a pure function from (node parameters, input token) to a
//! three-valued verdict. Tokens arrive as `Option<&str>`: `None` is the
//! completion probe for a word the user has not started typing, and every
//! value-bearing kind answers `Partial` to it so the completion layer can
//! suggest what could come next.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use cligraph_core::{Graph, NodeId, NodeKind};

/// Three-valued matcher verdict.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchVerdict {
    /// Token cannot reach this node.
    NoMatch,
    /// Token is a valid-so-far prefix of what this node accepts.
    Partial,
    /// Token fully satisfies this node.
    Exact,
}

/// Filter mode for matching.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Filter {
    /// Exact matches only. Used for resolution and argument binding.
    Strict,
    /// Keyword prefixes count as partial. Used for interactive completion.
    Relaxed,
}

/// Match one input token against one node.
///
/// Structural kinds and `End` are never presented to the user's input;
/// asking is answered with `NoMatch`.
pub fn match_token(
    graph: &Graph,
    id: NodeId,
    token: Option<&str>,
    filter: Filter,
) -> MatchVerdict {
    match graph.node(id).kind() {
        NodeKind::Word(text) => match_word(text, token, filter),
        NodeKind::Number(value) => match_number(*value, token),
        NodeKind::Range { min, max } => match_range(*min, *max, token),
        NodeKind::Variable(_) => match_variable(token),
        NodeKind::Ipv4 => match_ipv4(token),
        NodeKind::Ipv4Prefix => match_ipv4_prefix(token),
        NodeKind::Ipv6 => match_ipv6(token),
        NodeKind::Ipv6Prefix => match_ipv6_prefix(token),
        NodeKind::Selector
        | NodeKind::Option
        | NodeKind::Nul
        | NodeKind::Start
        | NodeKind::End(_) => MatchVerdict::NoMatch,
    }
}

pub(crate) fn match_word(text: &str, token: Option<&str>, filter: Filter) -> MatchVerdict {
    match filter {
        Filter::Relaxed => match token {
            None | Some("") => MatchVerdict::Partial,
            Some(tok) if tok == text => MatchVerdict::Exact,
            Some(tok) if text.starts_with(tok) => MatchVerdict::Partial,
            Some(_) => MatchVerdict::NoMatch,
        },
        Filter::Strict => match token {
            Some(tok) if tok == text => MatchVerdict::Exact,
            _ => MatchVerdict::NoMatch,
        },
    }
}

pub(crate) fn match_number(value: i64, token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    match tok.parse::<i64>() {
        Ok(parsed) if parsed == value => MatchVerdict::Exact,
        _ => MatchVerdict::NoMatch,
    }
}

pub(crate) fn match_range(min: i64, max: i64, token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    let Ok(value) = tok.parse::<i64>() else {
        return MatchVerdict::NoMatch;
    };
    // Ranges constrain the magnitude; the sign is not significant.
    let magnitude = (value as i128).abs();
    if magnitude >= min as i128 && magnitude <= max as i128 {
        MatchVerdict::Exact
    } else {
        MatchVerdict::NoMatch
    }
}

pub(crate) fn match_variable(token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    let starts_alpha = tok
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    if starts_alpha && tok.chars().all(|c| c.is_ascii_alphanumeric()) {
        MatchVerdict::Exact
    } else {
        MatchVerdict::NoMatch
    }
}

pub(crate) fn match_ipv4(token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    if !tok.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return MatchVerdict::NoMatch;
    }
    if tok.parse::<Ipv4Addr>().is_ok() {
        MatchVerdict::Exact
    } else {
        MatchVerdict::NoMatch
    }
}

pub(crate) fn match_ipv4_prefix(token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    if !tok.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '/') {
        return MatchVerdict::NoMatch;
    }
    match_prefix::<Ipv4Addr>(tok, 32)
}

pub(crate) fn match_ipv6(token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    if !tok.chars().all(is_ipv6_char) {
        return MatchVerdict::NoMatch;
    }
    if tok.parse::<Ipv6Addr>().is_ok() {
        MatchVerdict::Exact
    } else {
        MatchVerdict::NoMatch
    }
}

pub(crate) fn match_ipv6_prefix(token: Option<&str>) -> MatchVerdict {
    let Some(tok) = token else {
        return MatchVerdict::Partial;
    };
    if !tok.chars().all(|c| is_ipv6_char(c) || c == '/') {
        return MatchVerdict::NoMatch;
    }
    match_prefix::<Ipv6Addr>(tok, 128)
}

// The dot admits v4-mapped forms like ::ffff:10.0.0.1.
fn is_ipv6_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == ':' || c == '.'
}

/// Shared address/mask split for the two prefix kinds.
fn match_prefix<A: FromStr>(tok: &str, max_mask: u32) -> MatchVerdict {
    let Some((addr, mask)) = tok.split_once('/') else {
        // No slash yet: the prefix may still be being typed.
        return MatchVerdict::Partial;
    };
    if mask.is_empty() {
        // "10.0.0.0/" with the mask not typed yet.
        return MatchVerdict::Partial;
    }
    if addr.parse::<A>().is_err() {
        return MatchVerdict::NoMatch;
    }
    match mask.parse::<u32>() {
        Ok(bits) if bits <= max_mask => MatchVerdict::Exact,
        _ => MatchVerdict::NoMatch,
    }
}
