//! Application state management

use crate::history::HistoryLedger;
use crate::lifecycle::CorpusManager;
use crate::search::SearchEngine;
use crate::store::{CorpusStore, FsStore};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state holding the corpus store and the components over it
pub struct AppState {
    pub store: Arc<dyn CorpusStore>,
    pub search_engine: SearchEngine,
    pub corpus_manager: CorpusManager,
    pub history: HistoryLedger,
}

impl AppState {
    /// Initialize application state, seeding the bundled default corpus
    /// on first run.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let store: Arc<dyn CorpusStore> = Arc::new(FsStore::open(data_dir)?);

        let corpus_manager = CorpusManager::new(Arc::clone(&store));
        corpus_manager.ensure_initialized()?;

        Ok(Self {
            search_engine: SearchEngine::new(Arc::clone(&store)),
            history: HistoryLedger::new(Arc::clone(&store)),
            corpus_manager,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_then_search() {
        let dir = tempdir().unwrap();
        let state = AppState::new(dir.path().to_path_buf()).unwrap();

        // default corpus is seeded and searchable immediately
        let matches = state.search_engine.search("月");
        assert!(!matches.is_empty());

        // a second state over the same directory does not reseed
        state.store.write("001杜甫：春望\n国破山河在").unwrap();
        let state = AppState::new(dir.path().to_path_buf()).unwrap();
        assert!(state.search_engine.search("月").is_empty());
        assert_eq!(state.search_engine.search("山").len(), 1);
    }
}
