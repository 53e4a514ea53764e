//! Corpus storage capability
//!
//! The active corpus text and its metadata are owned by an injected store
//! so that parsing, search and lifecycle management stay independently
//! testable against in-memory fakes. The filesystem store keeps the
//! corpus as one plain-text file and the metadata (provenance, search
//! history) in a sqlite key-value settings database alongside it.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Corpus file name within the data directory
const CORPUS_FILE: &str = "poems_data.txt";
/// Settings database name within the data directory
const SETTINGS_DB: &str = "settings.db";

/// Read/write capability over the active corpus text plus a string
/// key-value metadata store.
pub trait CorpusStore: Send + Sync {
    /// Full text of the active corpus
    fn read(&self) -> Result<String>;
    /// Overwrite the active corpus with `text`
    fn write(&self, text: &str) -> Result<()>;
    /// Whether any corpus is present at all
    fn exists(&self) -> bool;
    fn get_meta(&self, key: &str) -> Result<Option<String>>;
    fn set_meta(&self, key: &str, value: &str) -> Result<()>;
}

/// Default data directory for the corpus file and settings database
pub fn default_data_dir() -> PathBuf {
    if let Some(base) = dirs::data_dir() {
        return base.join("feihua");
    }
    PathBuf::from("data")
}

/// Filesystem-backed store
pub struct FsStore {
    corpus_path: PathBuf,
    settings_db_path: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `data_dir`, creating the directory and the
    /// settings database tables if missing.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

        let store = Self {
            corpus_path: data_dir.join(CORPUS_FILE),
            settings_db_path: data_dir.join(SETTINGS_DB),
        };
        store.init_settings_db()?;
        Ok(store)
    }

    /// Get a new settings database connection (each call creates a new
    /// connection)
    fn connection(&self) -> Result<Connection> {
        Connection::open(&self.settings_db_path)
            .with_context(|| format!("Failed to open settings db at {:?}", self.settings_db_path))
    }

    fn init_settings_db(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(
            r#"
            -- App settings (key-value store: provenance, search history)
            CREATE TABLE IF NOT EXISTS app_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

impl CorpusStore for FsStore {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.corpus_path)
            .with_context(|| format!("Failed to read corpus at {:?}", self.corpus_path))
    }

    fn write(&self, text: &str) -> Result<()> {
        fs::write(&self.corpus_path, text)
            .with_context(|| format!("Failed to write corpus at {:?}", self.corpus_path))
    }

    fn exists(&self) -> bool {
        self.corpus_path.exists()
    }

    fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connection()?;
        let value = conn
            .query_row(
                "SELECT value FROM app_settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read setting")?;
        Ok(value)
    }

    fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT OR REPLACE INTO app_settings (key, value) VALUES (?1, ?2)",
            [key, value],
        )
        .context("Failed to write setting")?;
        Ok(())
    }
}

/// In-memory store for tests and embedded hosts
#[derive(Default)]
pub struct MemoryStore {
    corpus: Mutex<Option<String>>,
    meta: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corpus(text: &str) -> Self {
        let store = Self::default();
        *store.corpus.lock().unwrap() = Some(text.to_string());
        store
    }
}

impl CorpusStore for MemoryStore {
    fn read(&self) -> Result<String> {
        self.corpus
            .lock()
            .unwrap()
            .clone()
            .context("No corpus present")
    }

    fn write(&self, text: &str) -> Result<()> {
        *self.corpus.lock().unwrap() = Some(text.to_string());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.corpus.lock().unwrap().is_some()
    }

    fn get_meta(&self, key: &str) -> Result<Option<String>> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
