//! Bounded search-history ledger

use crate::store::CorpusStore;
use anyhow::Result;
use std::sync::Arc;

/// Settings key holding the serialized history sequence
const HISTORY_KEY: &str = "search_history";
/// Number of recent distinct characters kept
const MAX_HISTORY_SIZE: usize = 6;

/// Recent-queries ledger: distinct single characters, most recent first,
/// persisted as a JSON array in the settings store.
pub struct HistoryLedger {
    store: Arc<dyn CorpusStore>,
}

impl HistoryLedger {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// Record a searched character: a re-searched character moves to the
    /// front rather than duplicating, and the list is capped at 6.
    /// Returns the updated history; a persistence failure is logged and
    /// the in-memory result still returned.
    pub fn record(&self, ch: char) -> Vec<String> {
        let entry = ch.to_string();
        let mut entries = self.entries();
        entries.retain(|e| e != &entry);
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_SIZE);

        if let Err(e) = self.persist(&entries) {
            tracing::warn!("Failed to persist search history: {:#}", e);
        }
        entries
    }

    /// Current history, most recent first. Missing or corrupt history
    /// yields an empty list.
    pub fn entries(&self) -> Vec<String> {
        match self.store.get_meta(HISTORY_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load search history: {:#}", e);
                Vec::new()
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.persist(&[])
    }

    fn persist(&self, entries: &[String]) -> Result<()> {
        self.store
            .set_meta(HISTORY_KEY, &serde_json::to_string(entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ledger() -> HistoryLedger {
        HistoryLedger::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_most_recent_first() {
        let ledger = ledger();
        ledger.record('月');
        ledger.record('花');
        ledger.record('山');
        assert_eq!(ledger.entries(), vec!["山", "花", "月"]);
    }

    #[test]
    fn test_repeat_moves_to_front_without_duplicating() {
        let ledger = ledger();
        ledger.record('月');
        ledger.record('花');
        ledger.record('月');
        assert_eq!(ledger.entries(), vec!["月", "花"]);
    }

    #[test]
    fn test_capacity_is_six() {
        let ledger = ledger();
        for ch in ['一', '二', '三', '四', '五', '六', '七'] {
            ledger.record(ch);
        }
        assert_eq!(ledger.entries(), vec!["七", "六", "五", "四", "三", "二"]);
    }

    #[test]
    fn test_clear() {
        let ledger = ledger();
        ledger.record('月');
        ledger.clear().unwrap();
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_history_survives_reload() {
        let store = Arc::new(MemoryStore::new());
        HistoryLedger::new(store.clone()).record('月');
        assert_eq!(HistoryLedger::new(store).entries(), vec!["月"]);
    }
}
