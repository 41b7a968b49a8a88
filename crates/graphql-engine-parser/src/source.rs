use memchr::memchr2_iter;
use serde::Deserialize;
use serde::Serialize;

/// A 1-based line/column pair inside a [`Source`].
///
/// Columns count Unicode scalar values, not bytes.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// A named body of GraphQL text.
///
/// The `location_offset` describes where `body` starts inside some larger
/// file (for instance a GraphQL literal embedded in a host-language file).
/// It only affects how locations are printed in diagnostics; positions and
/// [`SourceLocation`]s produced by [`Source::get_location`] are always
/// relative to `body` itself.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Source {
    body: String,
    name: String,
    location_offset: SourceLocation,
}

impl Source {
    pub const DEFAULT_NAME: &'static str = "GraphQL request";

    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, Self::DEFAULT_NAME)
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            location_offset: SourceLocation::default(),
        }
    }

    /// Line and column are clamped to be at least 1.
    pub fn with_location_offset(mut self, offset: SourceLocation) -> Self {
        self.location_offset = SourceLocation {
            line: offset.line.max(1),
            column: offset.column.max(1),
        };
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_offset(&self) -> SourceLocation {
        self.location_offset
    }

    /// Converts a byte offset into `body` into a 1-based line and column.
    ///
    /// `\r\n`, `\n` and `\r` each terminate a line. Offsets past the end of
    /// the body are clamped to the end.
    pub fn get_location(&self, position: usize) -> SourceLocation {
        let position = position.min(self.body.len());
        let bytes = &self.body.as_bytes()[..position];
        let mut line = 1;
        let mut line_start = 0;
        let mut lf_after_cr = None;
        for idx in memchr2_iter(b'\n', b'\r', bytes) {
            if lf_after_cr == Some(idx) {
                line_start = idx + 1;
                continue;
            }
            line += 1;
            line_start = idx + 1;
            if bytes[idx] == b'\r' {
                lf_after_cr = Some(idx + 1);
            }
        }
        let column = self
            .body
            .get(line_start..position)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        SourceLocation { line, column }
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

/// Splits `text` on `\r\n`, `\n` and `\r`.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut skip_lf_at = None;
    for idx in memchr2_iter(b'\n', b'\r', bytes) {
        if skip_lf_at == Some(idx) {
            line_start = idx + 1;
            continue;
        }
        lines.push(&text[line_start..idx]);
        line_start = idx + 1;
        if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
            skip_lf_at = Some(idx + 1);
        }
    }
    lines.push(&text[line_start..]);
    lines
}
