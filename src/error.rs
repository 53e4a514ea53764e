//! Error types for Feihua

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeihuaError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl serde::Serialize for FeihuaError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
