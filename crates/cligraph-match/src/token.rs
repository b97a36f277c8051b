//! Input line tokenization, shared by both engines.

/// Split a raw input line into whitespace-delimited tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Tokenize for a completion query.
///
/// A line that is empty or ends in whitespace gets a trailing empty token
/// standing for the word the user has not started typing; the matchers
/// treat it as the absent-token probe and report what could follow.
pub fn tokenize_completion(line: &str) -> Vec<&str> {
    let mut tokens = tokenize(line);
    if line.is_empty() || line.ends_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens
}
