//! Classification of one raw input line.

/// A raw line, after trailing whitespace is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// No TAB separates the id from a token list.
    MissingTokens { id: &'a str },
    Record { id: &'a str, tokens: &'a str },
}

/// Split a line at its first TAB into id and token text.
pub fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim_end_matches(|c: char| c.is_ascii_whitespace());
    if line.is_empty() {
        return Line::Blank;
    }
    match line.split_once('\t') {
        Some((id, tokens)) => Line::Record { id, tokens },
        None => Line::MissingTokens { id: line },
    }
}
