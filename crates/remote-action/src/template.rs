//! # Path Templates
//!
//! A path template is a slash-separated path whose segments may contain named
//! placeholders written as `:name`. Placeholder names are made of ASCII
//! letters, digits and `_`; a purely numeric name (`:8080`) is literal text.
//!
//! Templates are parsed once, when the owning
//! [`ActionDescriptor`](crate::ActionDescriptor) is created, and resolved on
//! every invocation.

use std::fmt;

/// One piece of a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    Placeholder(String),
}

/// A parsed path template.
///
/// Empty segments (leading, trailing or doubled slashes) are dropped at parse
/// time, so `"/:id/:action/"` has exactly two segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Vec<Piece>>,
}

impl PathTemplate {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(parse_segment)
            .collect();
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of appearance, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().flatten().filter_map(|piece| match piece {
            Piece::Placeholder(name) => Some(name.as_str()),
            Piece::Literal(_) => None,
        })
    }

    /// Resolves every segment with `lookup`, which returns the text for a
    /// placeholder name.
    ///
    /// Stops at the first lookup error. The returned segments are raw text;
    /// percent-encoding happens when they are appended to a URL.
    pub fn resolve<E>(
        &self,
        mut lookup: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<Vec<String>, E> {
        let mut resolved = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let mut text = String::new();
            for piece in segment {
                match piece {
                    Piece::Literal(literal) => text.push_str(literal),
                    Piece::Placeholder(name) => text.push_str(&lookup(name)?),
                }
            }
            // A placeholder resolved to "" collapses its segment.
            if !text.is_empty() {
                resolved.push(text);
            }
        }
        Ok(resolved)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse_segment(segment: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut rest = segment;

    while let Some(pos) = rest.find(':') {
        literal.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let len = after
            .char_indices()
            .find(|(_, c)| !is_name_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        let name = &after[..len];

        if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
            literal.push(':');
            rest = after;
            continue;
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Placeholder(name.to_string()));
        rest = &after[len..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    pieces
}
