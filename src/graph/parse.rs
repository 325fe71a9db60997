use regex::Regex;
use std::sync::LazyLock;

static DELIM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(crate::GRAPH_DELIM).expect("valid delimiter pattern"));

/// Split `NODE: n1 n2 ...` into the node and its neighbors.
///
/// Colons and whitespace runs are interchangeable separators. Blank lines
/// carry no node and yield `None`.
pub fn line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = DELIM
        .split(line)
        .filter(|token| !token.is_empty())
        .map(str::to_string);
    let node = tokens.next()?;
    Some((node, tokens.collect()))
}
