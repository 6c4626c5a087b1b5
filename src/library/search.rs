//! Free-text search over the catalog.
//!
//! A query is lowercased and trimmed, then split into an optional kind
//! filter (`-b`, `-d`, `-m`) and a residual term. An item matches when its
//! kind passes the filter and the term is empty or found in the item's
//! identifier, title or author.
//!
//! If a query carries more than one marker the first one found in
//! `-b`, `-d`, `-m` order selects the kind; all markers are stripped from
//! the term either way.

use super::item::{ItemKind, LibraryItem};

/// A parsed search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Kind filter selected by a marker
    pub kind: Option<ItemKind>,

    /// Lowercased residual term (may be empty)
    pub term: String,
}

impl SearchQuery {
    /// Parse a raw query string
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_lowercase();
        let normalized = normalized.trim();

        let kind = ItemKind::ALL
            .into_iter()
            .find(|k| normalized.contains(k.marker()));

        let term = strip_markers(normalized);

        Self {
            kind,
            term: term.trim().to_string(),
        }
    }

    /// Check whether an item satisfies this query
    pub fn matches(&self, item: &LibraryItem) -> bool {
        if self.kind.is_some_and(|k| k != item.kind()) {
            return false;
        }

        if self.term.is_empty() {
            return true;
        }

        let id = item.id_text().to_lowercase();
        id == self.term
            || id.contains(&self.term)
            || item.title().to_lowercase().contains(&self.term)
            || item.author().to_lowercase().contains(&self.term)
    }
}

/// Drop every `-b`, `-d` and `-m` in a single left-to-right pass.
///
/// Text joined by a removal is not rescanned: `--bx` leaves `-x`.
fn strip_markers(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' && matches!(chars.peek(), Some('b' | 'd' | 'm')) {
            chars.next();
            continue;
        }
        out.push(c);
    }

    out
}
