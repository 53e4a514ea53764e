//! Poem and match value types

use serde::{Deserialize, Serialize};

/// One parsed poem: corpus-local id, attribution and ordered verse lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poem {
    pub id: String,
    pub author: String,
    pub title: String,
    /// Ordered non-empty verse lines, corpus order
    pub content: Vec<String>,
    /// Attribution label, author plus bracketed title
    pub source: String,
}

impl Poem {
    /// Build an empty poem with the attribution label derived from
    /// author and title.
    pub fn new(id: String, author: String, title: String) -> Self {
        let source = format!("{}《{}》", author, title);
        Self {
            id,
            author,
            title,
            content: Vec::new(),
            source,
        }
    }
}

/// One search hit: a verse line containing the query character, with the
/// owning poem's attribution and every in-line occurrence offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemMatch {
    /// The matched line, verbatim
    pub line: String,
    pub author: String,
    pub title: String,
    pub source: String,
    /// Zero-based character offsets of every occurrence of the query
    /// character in `line`, strictly increasing
    pub char_indices: Vec<usize>,
}
