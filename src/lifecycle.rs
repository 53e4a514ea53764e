//! Corpus lifecycle: first-run seeding, replacement, provenance
//!
//! Handles replacing the active corpus text from a remote source, a local
//! file or the bundled default, and tracks version/source provenance in
//! the settings store. Replacement is all-or-nothing with respect to the
//! corpus text: the overwrite only happens once the full replacement text
//! is in hand, so any failure leaves the previous corpus authoritative.

use crate::error::FeihuaError;
use crate::store::CorpusStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Default remote corpus endpoint
pub const DEFAULT_CORPUS_URL: &str = "https://poems.feihua.app/tangshi300.txt";

/// Bundled default corpus (唐诗三百首 excerpt)
pub const DEFAULT_CORPUS_TEXT: &str = include_str!("../data/default_poems.txt");

/// Settings keys for provenance metadata
const VERSION_KEY: &str = "data_version";
const SOURCE_KEY: &str = "data_source";

/// Provenance source labels
pub const DEFAULT_SOURCE_LABEL: &str = "唐诗三百首(初始数据)";
pub const OFFICIAL_SOURCE_LABEL: &str = "官方数据源";
pub const CUSTOM_SOURCE_LABEL: &str = "自定义数据源";
pub const LOCAL_IMPORT_SOURCE_LABEL: &str = "本地导入";

/// Version/source labels describing where the active corpus came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub version: String,
    pub source: String,
}

/// Governs replacement of the active corpus and provenance tracking
pub struct CorpusManager {
    store: Arc<dyn CorpusStore>,
}

impl CorpusManager {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    /// First-run initialization: seed the bundled default corpus, but
    /// only when no corpus exists yet. A corpus the user has already
    /// replaced is never clobbered by a later restart.
    ///
    /// Returns true when the default was written.
    pub fn ensure_initialized(&self) -> Result<bool, FeihuaError> {
        if self.store.exists() {
            return Ok(false);
        }

        self.store
            .write(DEFAULT_CORPUS_TEXT)
            .map_err(|e| FeihuaError::Storage(format!("Failed to seed default corpus: {:#}", e)))?;
        self.record_provenance(DEFAULT_SOURCE_LABEL);
        Ok(true)
    }

    /// Replace the active corpus with text fetched from `url`, or from
    /// the default endpoint when omitted. The overwrite only happens once
    /// the full response body has been read; any transport failure or
    /// non-200 status leaves the corpus untouched.
    pub async fn replace_from_remote(&self, url: Option<&str>) -> Result<Provenance, FeihuaError> {
        let target = url.unwrap_or(DEFAULT_CORPUS_URL);

        let client = reqwest::Client::new();
        let response = client.get(target).send().await.map_err(|e| {
            FeihuaError::Fetch(format!("Failed to fetch corpus from {}: {}", target, e))
        })?;

        if response.status().as_u16() != 200 {
            return Err(FeihuaError::Fetch(format!(
                "Failed to fetch corpus from {}: HTTP {}",
                target,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeihuaError::Fetch(format!("Failed to read corpus body: {}", e)))?;

        self.store
            .write(&body)
            .map_err(|e| FeihuaError::Storage(format!("Failed to write corpus: {:#}", e)))?;

        let label = if url.is_none() || url == Some(DEFAULT_CORPUS_URL) {
            OFFICIAL_SOURCE_LABEL
        } else {
            CUSTOM_SOURCE_LABEL
        };
        Ok(self.record_provenance(label))
    }

    /// Replace the active corpus with the full content of a local file.
    /// On read or write failure the corpus is left untouched.
    pub async fn replace_from_local_file(&self, path: &Path) -> Result<Provenance, FeihuaError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FeihuaError::Import(format!("Failed to read {:?}: {}", path, e)))?;

        self.store
            .write(&text)
            .map_err(|e| FeihuaError::Import(format!("Failed to write corpus: {:#}", e)))?;

        Ok(self.record_provenance(LOCAL_IMPORT_SOURCE_LABEL))
    }

    /// Overwrite the active corpus with the bundled default,
    /// unconditionally. Explicit user action, no existence check.
    pub fn reset_to_default(&self) -> Result<Provenance, FeihuaError> {
        self.store
            .write(DEFAULT_CORPUS_TEXT)
            .map_err(|e| FeihuaError::Storage(format!("Failed to write corpus: {:#}", e)))?;
        Ok(self.record_provenance(DEFAULT_SOURCE_LABEL))
    }

    /// Current provenance. Installs predating provenance tracking report
    /// the default source label and an empty version.
    pub fn provenance(&self) -> Provenance {
        let version = self
            .store
            .get_meta(VERSION_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        let source = self
            .store
            .get_meta(SOURCE_KEY)
            .ok()
            .flatten()
            .unwrap_or_else(|| DEFAULT_SOURCE_LABEL.to_string());
        Provenance { version, source }
    }

    /// Record provenance after a successful corpus write. A metadata
    /// write failure is logged and the corpus change stands.
    fn record_provenance(&self, source: &str) -> Provenance {
        let provenance = Provenance {
            version: stamp_version(),
            source: source.to_string(),
        };
        if let Err(e) = self.store.set_meta(VERSION_KEY, &provenance.version) {
            tracing::warn!("Failed to record corpus version: {:#}", e);
        }
        if let Err(e) = self.store.set_meta(SOURCE_KEY, &provenance.source) {
            tracing::warn!("Failed to record corpus source: {:#}", e);
        }
        provenance
    }
}

/// Date stamp for provenance versions, `YYYY-M-D` without zero padding
fn stamp_version() -> String {
    chrono::Local::now().format("%Y-%-m-%-d").to_string()
}
