// src/services/browse_service.rs
//
// Carnatic catalog browser: alphabetical index, filters, paging, and
// loading a single record from the Carnatic catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{carnatic_raga_names, Page, RagaRecord, Tradition};
use crate::error::{AppError, AppResult};
use crate::repositories::RagaCatalog;

pub const BROWSE_PAGE_SIZE: usize = 15;

/// Browse filters. Page numbers are 1-based and clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseFilter {
    /// Only names starting with this letter (case-insensitive)
    pub letter: Option<char>,

    /// Only names containing this text (case-insensitive, trimmed)
    pub text: Option<String>,

    pub page: usize,
}

impl BrowseFilter {
    fn admits(&self, name: &str) -> bool {
        let upper = name.to_uppercase();

        if let Some(letter) = self.letter {
            if !upper.starts_with(letter.to_ascii_uppercase()) {
                return false;
            }
        }

        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => upper.contains(&text.to_uppercase()),
            _ => true,
        }
    }
}

pub struct CarnaticBrowser {
    catalog: Arc<dyn RagaCatalog>,
    names: Vec<&'static str>,
}

impl CarnaticBrowser {
    pub fn new(catalog: Arc<dyn RagaCatalog>) -> Self {
        Self::with_names(catalog, carnatic_raga_names())
    }

    pub fn with_names(catalog: Arc<dyn RagaCatalog>, names: &[&'static str]) -> Self {
        let mut names = names.to_vec();
        names.sort_by_key(|name| name.to_lowercase());
        Self { catalog, names }
    }

    /// Every indexed name, sorted case-insensitively
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Distinct first letters present in the index, in order
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .names
            .iter()
            .filter_map(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        letters.dedup();
        letters
    }

    pub fn filter(&self, filter: &BrowseFilter) -> Vec<&'static str> {
        self.names
            .iter()
            .copied()
            .filter(|name| filter.admits(name))
            .collect()
    }

    pub fn page(&self, filter: &BrowseFilter) -> Page<String> {
        let matches: Vec<String> = self
            .filter(filter)
            .into_iter()
            .map(str::to_string)
            .collect();
        Page::slice(&matches, filter.page, BROWSE_PAGE_SIZE)
    }

    /// Load the Carnatic record for `name`
    pub async fn select(&self, name: &str) -> AppResult<RagaRecord> {
        log::debug!("event=browse_select module=browse raga={:?}", name);

        self.catalog
            .lookup(Tradition::Carnatic, name)
            .await
            .map_err(|error| {
                log::warn!(
                    "event=browse_select module=browse status=error raga={:?} message={:?}",
                    name,
                    error.message()
                );
                AppError::Other(format!("Could not load \"{}\". {}", name, error.message()))
            })
    }
}
