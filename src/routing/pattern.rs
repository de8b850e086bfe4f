//! Path pattern parsing and matching
//!
//! Patterns are literal paths with optional `{name}` templated segments,
//! e.g. `/hello/{name}`. Matching extracts named parameters, URL-decoded.

use std::collections::HashMap;

/// Extracted path parameters, keyed by segment name
pub type PathParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route path pattern
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string. Segments wrapped in `{...}` become named
    /// parameters; everything else is matched literally.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .into_iter()
            .map(|seg| {
                match seg
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .filter(|name| !name.is_empty())
                {
                    Some(name) => Segment::Param(name.to_string()),
                    None => Segment::Literal(seg.to_string()),
                }
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The original pattern string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a request path against this pattern.
    ///
    /// Returns the extracted parameters on a match, `None` otherwise.
    /// A templated segment requires a non-empty path segment, so
    /// `/hello/` does not match `/hello/{name}`.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let path_segments = split_path(path);
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, value) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != value {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decode_segment(value));
                }
            }
        }

        Some(params)
    }
}

/// Split a path into segments, dropping the leading slash.
/// `/` yields a single empty segment so the root pattern still matches.
fn split_path(path: &str) -> Vec<&str> {
    path.trim_start_matches('/').split('/').collect()
}

/// Percent-decode a path segment. Invalid UTF-8 in the decoded bytes
/// falls back to the raw segment.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map_or_else(|_| segment.to_string(), std::borrow::Cow::into_owned)
}
