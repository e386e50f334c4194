//! The projection splicer: validation and brace-aware field insertion.
//!
//! Every composer that adds fields to a caller-supplied or previously
//! composed projection goes through [`append_field`]. It anchors on the
//! *last* closing brace, so nested sub-objects pass through unmodified as
//! long as the outermost braces are the true start and end of the text.

use crate::error::{QueryError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strips all whitespace from a fragment. Used for validation and for
/// whitespace-insensitive comparison in tests.
pub fn clean(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Whether `text` is a well-formed brace-delimited projection.
pub fn is_valid_projection(text: &str) -> bool {
    let cleaned = clean(text);
    cleaned.starts_with('{') && cleaned.ends_with('}')
}

/// Splices `new_fields` into `projection` immediately before its last
/// closing brace.
pub fn append_field(projection: &str, new_fields: &str) -> Result<String> {
    let last_brace = projection.rfind('}').ok_or(QueryError::MissingClosingBrace)?;

    let head = projection[..last_brace].trim_end();
    Ok(format!("{head}, {} }}", new_fields.trim()))
}

/// Ordered field entries rendered to a projection literal.
///
/// Composers that build a projection from scratch collect entries here and
/// render once, instead of splicing text repeatedly; only validated text
/// crosses the crate boundary.
#[derive(Debug, Default)]
pub(crate) struct Projection {
    entries: Vec<String>,
}

impl Projection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a field entry. Empty entries are dropped so optional
    /// composers never leave stray commas behind.
    pub(crate) fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !entry.trim().is_empty() {
            self.entries.push(entry);
        }
    }

    pub(crate) fn render(&self) -> String {
        format!("{{ {} }}", self.entries.join(", "))
    }
}
