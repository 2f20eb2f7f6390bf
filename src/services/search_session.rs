// src/services/search_session.rs
//
// Search session
//
// The caller owns a SearchState value; the controller owns the single
// in-flight cancellation token. State transitions are pure functions so the
// shell can render every intermediate state.
//
// CRITICAL RULES:
// - Starting a search cancels the previous one first
// - A rejected query makes no catalog call and does not touch the in-flight search
// - A superseded or cancelled search publishes no state

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::domain::{RagaQuery, ResolutionOutcome, ResolvedRaga, TraditionSelection};
use crate::services::resolution_service::RagaResolver;

// ============================================================================
// SEARCH STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub selection: TraditionSelection,
    pub status: SearchStatus,
    pub result: Option<ResolvedRaga>,
    pub error: Option<String>,

    /// False until a query has actually been sent to the catalogs
    pub has_searched: bool,
}

impl SearchState {
    pub fn new(query: impl Into<String>, selection: TraditionSelection) -> Self {
        Self {
            query: query.into(),
            selection,
            ..Default::default()
        }
    }

    /// Query accepted; catalogs are being asked
    pub fn begin(self) -> Self {
        Self {
            status: SearchStatus::Loading,
            result: None,
            error: None,
            has_searched: true,
            ..self
        }
    }

    /// Query refused before any catalog call
    pub fn reject(self, message: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Failed,
            result: None,
            error: Some(message.into()),
            has_searched: false,
            ..self
        }
    }

    pub fn complete(self, outcome: ResolutionOutcome) -> Self {
        let error = outcome.message();
        match outcome {
            ResolutionOutcome::Found(resolved) => Self {
                status: SearchStatus::Succeeded,
                result: Some(resolved),
                error: None,
                has_searched: true,
                ..self
            },
            ResolutionOutcome::NotFound { .. } => Self {
                status: SearchStatus::Failed,
                result: None,
                error,
                has_searched: true,
                ..self
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }
}

// ============================================================================
// SEARCH CONTROLLER
// ============================================================================

struct InFlight {
    generation: u64,
    token: CancellationToken,
}

pub struct SearchController {
    resolver: Arc<RagaResolver>,
    current: Mutex<Option<InFlight>>,
    next_generation: AtomicU64,
}

impl SearchController {
    pub fn new(resolver: Arc<RagaResolver>) -> Self {
        Self {
            resolver,
            current: Mutex::new(None),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Validate and run one search.
    ///
    /// Returns the final state, or `None` if this search was superseded by a
    /// newer one or cancelled.
    pub async fn search(&self, state: SearchState) -> Option<SearchState> {
        let query = match RagaQuery::parse(&state.query) {
            Ok(query) => query,
            Err(error) => {
                log::debug!(
                    "event=search_rejected module=search_session query={:?} reason={:?}",
                    state.query,
                    error.to_string()
                );
                return Some(state.reject(error.to_string()));
            }
        };

        let (generation, token) = self.start();
        let loading = state.begin();

        let outcome = self
            .resolver
            .resolve_cancellable(&query, loading.selection, &token)
            .await;

        self.finish(generation);
        outcome.map(|outcome| loading.complete(outcome))
    }

    /// Abort the in-flight search, if any
    pub fn cancel(&self) {
        if let Some(in_flight) = self.lock().take() {
            in_flight.token.cancel();
        }
    }

    pub fn is_searching(&self) -> bool {
        self.lock().is_some()
    }

    fn start(&self) -> (u64, CancellationToken) {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let token = CancellationToken::new();

        let previous = self.lock().replace(InFlight {
            generation,
            token: token.clone(),
        });
        if let Some(previous) = previous {
            previous.token.cancel();
        }

        (generation, token)
    }

    fn finish(&self, generation: u64) {
        let mut current = self.lock();
        if current.as_ref().is_some_and(|c| c.generation == generation) {
            *current = None;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<InFlight>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
