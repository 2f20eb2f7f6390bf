// src/repositories/raga_catalog.rs
//
// Catalog lookup: one call per (tradition, raga name).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RagaRecord, Tradition};

/// Why a single catalog lookup failed.
///
/// Callers that only need "did it work" can treat both variants the same;
/// the split exists for logging and for the HTTP mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum LookupError {
    /// The catalog answered and has no such raga
    #[error("{0}")]
    NotFound(String),

    /// Network failure, timeout, unexpected status or undecodable body
    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    pub fn message(&self) -> &str {
        match self {
            LookupError::NotFound(message) | LookupError::Transport(message) => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RagaCatalog: Send + Sync {
    /// Fetch the record named `name` from `tradition`'s catalog.
    /// The returned record is always tagged with `tradition`.
    async fn lookup(&self, tradition: Tradition, name: &str) -> Result<RagaRecord, LookupError>;
}
