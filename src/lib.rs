//! Feihua - Classical Chinese Poetry Corpus Search
//!
//! Backend library providing corpus parsing, exact-character search over
//! verse lines and corpus lifecycle management.

// Poem types must be defined first as they're used by parser and search
pub mod poem;
pub mod classify;
pub mod parser;
pub mod search;
pub mod store;
pub mod lifecycle;
pub mod history;
pub mod error;
pub mod state;

pub use error::FeihuaError;
pub use state::AppState;
pub use poem::{Poem, PoemMatch};
pub use classify::{classify, parse_header, HeaderInfo, LineClass};
pub use parser::parse_corpus;
pub use search::{scan_poems, SearchEngine};
pub use store::{default_data_dir, CorpusStore, FsStore, MemoryStore};
pub use lifecycle::{
    CorpusManager, Provenance, CUSTOM_SOURCE_LABEL, DEFAULT_CORPUS_TEXT, DEFAULT_CORPUS_URL,
    DEFAULT_SOURCE_LABEL, LOCAL_IMPORT_SOURCE_LABEL, OFFICIAL_SOURCE_LABEL,
};
pub use history::HistoryLedger;
