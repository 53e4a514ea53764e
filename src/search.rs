//! Exact-character search over parsed poems

use crate::parser::parse_corpus;
use crate::poem::{Poem, PoemMatch};
use crate::store::CorpusStore;
use std::sync::Arc;

/// Search engine over the active corpus store.
///
/// The corpus is re-read and re-parsed on every search so results always
/// reflect the current corpus text; nothing is cached across calls.
pub struct SearchEngine {
    store: Arc<dyn CorpusStore>,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// Search every verse line of the active corpus for a single character.
    ///
    /// An unreadable corpus yields an empty result rather than an error;
    /// callers that need to distinguish "no data" from "no matches" must
    /// check the store separately.
    pub fn search(&self, query: &str) -> Vec<PoemMatch> {
        if query.chars().count() != 1 {
            return Vec::new();
        }

        let raw = match self.store.read() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Corpus unreadable, returning no matches: {:#}", e);
                return Vec::new();
            }
        };

        scan_poems(&parse_corpus(&raw), query)
    }
}

/// Scan poems in corpus order for verse lines containing `query`.
///
/// `query` must be exactly one character; anything else returns no
/// matches. Each matching line carries the zero-based character offset of
/// every occurrence, left to right, adjacent repeats included. No
/// ranking, no deduplication of identical lines across poems.
pub fn scan_poems(poems: &[Poem], query: &str) -> Vec<PoemMatch> {
    let mut chars = query.chars();
    let target = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Vec::new(),
    };

    let mut matches = Vec::new();
    for poem in poems {
        for line in &poem.content {
            let char_indices: Vec<usize> = line
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == target)
                .map(|(i, _)| i)
                .collect();

            if !char_indices.is_empty() {
                matches.push(PoemMatch {
                    line: line.clone(),
                    author: poem.author.clone(),
                    title: poem.title.clone(),
                    source: poem.source.clone(),
                    char_indices,
                });
            }
        }
    }
    matches
}
