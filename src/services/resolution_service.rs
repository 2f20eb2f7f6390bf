// src/services/resolution_service.rs
//
// Raga Resolver
//
// Turns a validated query plus a tradition selection into exactly one
// outcome: the first record any tried catalog returns, or every failure.
//
// CRITICAL RULES:
// - Catalog calls are sequential; never more than one per tradition
// - The first success ends the search; later traditions are not queried
// - A failed lookup is recorded and the next tradition is tried
// - Never returns an error: the outcome carries every failure
// - Stateless across calls; membership only biases the order
// - A found record is tagged with the catalog that was queried; a record of
//   the other tradition counts as a failed lookup
//
// CANCELLATION:
// - `resolve_cancellable` races every catalog call against a token
// - A cancelled search drops the in-flight call and publishes no outcome

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::{
    LookupFailure, RagaQuery, ResolutionOutcome, ResolutionState, ResolvedRaga,
    Tradition, TraditionMembership, TraditionSelection,
};
use crate::events::{
    CatalogLookupFailed, EventBus, RagaNotFound, RagaResolved, RagaSearchCancelled,
    RagaSearchStarted,
};
use crate::repositories::{LookupError, RagaCatalog};

// ============================================================================
// RAGA RESOLVER
// ============================================================================

pub struct RagaResolver {
    catalog: Arc<dyn RagaCatalog>,
    event_bus: Arc<EventBus>,
    membership: &'static TraditionMembership,
}

impl RagaResolver {
    pub fn new(catalog: Arc<dyn RagaCatalog>, event_bus: Arc<EventBus>) -> Self {
        Self::with_membership(catalog, event_bus, TraditionMembership::shared())
    }

    pub fn with_membership(
        catalog: Arc<dyn RagaCatalog>,
        event_bus: Arc<EventBus>,
        membership: &'static TraditionMembership,
    ) -> Self {
        Self {
            catalog,
            event_bus,
            membership,
        }
    }

    /// Order in which traditions will be tried.
    ///
    /// Single selection: just that tradition. Both (or none): the membership
    /// table's guess first, the other one second.
    pub fn plan_order(&self, query: &RagaQuery, selection: TraditionSelection) -> Vec<Tradition> {
        let selection = selection.normalized();
        if let Some(only) = selection.single() {
            return vec![only];
        }

        let first = self.membership.preferred_tradition(query.as_str());
        vec![first, first.other()]
    }

    /// Resolve to completion
    pub async fn resolve(
        &self,
        query: &RagaQuery,
        selection: TraditionSelection,
    ) -> ResolutionOutcome {
        // Nobody else holds this token, so the search always completes
        let token = CancellationToken::new();
        match self.resolve_cancellable(query, selection, &token).await {
            Some(outcome) => outcome,
            None => ResolutionOutcome::NotFound {
                query: query.as_str().to_string(),
                failures: Vec::new(),
            },
        }
    }

    /// Resolve unless `token` fires first.
    ///
    /// Returns `None` when cancelled; the in-flight catalog call is dropped
    /// and its result, if any, is discarded.
    pub async fn resolve_cancellable(
        &self,
        query: &RagaQuery,
        selection: TraditionSelection,
        token: &CancellationToken,
    ) -> Option<ResolutionOutcome> {
        let search_id = Uuid::new_v4();
        let plan = self.plan_order(query, selection);
        let name = query.as_str();

        log::info!(
            "event=search_started module=resolver search_id={} query={:?} plan={:?}",
            search_id,
            name,
            plan
        );
        self.event_bus
            .emit(RagaSearchStarted::new(search_id, name.to_string(), plan.clone()));

        let mut state = ResolutionState::NotStarted;
        let mut failures = Vec::with_capacity(plan.len());

        for (idx, tradition) in plan.iter().copied().enumerate() {
            state = self.transition(search_id, state, ResolutionState::Trying(tradition));

            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    self.cancelled(search_id, name, state);
                    return None;
                }
                result = self.catalog.lookup(tradition, name) => result,
            };

            let error = match result.map(|record| ResolvedRaga::new(tradition, record)) {
                Ok(Ok(resolved)) => {
                    self.transition(search_id, state, ResolutionState::Succeeded);
                    return Some(self.found(search_id, name, resolved, idx + 1));
                }
                Ok(Err(stray)) => LookupError::Transport(format!(
                    "{} catalog returned a {} record",
                    tradition.label(),
                    stray.tradition().label()
                )),
                Err(error) => error,
            };

            self.record_failure(search_id, tradition, &error);
            failures.push(LookupFailure::new(tradition, error.message()));
        }

        self.transition(search_id, state, ResolutionState::ExhaustedFailed);
        self.event_bus
            .emit(RagaNotFound::new(search_id, name.to_string(), plan));

        Some(ResolutionOutcome::NotFound {
            query: name.to_string(),
            failures,
        })
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn transition(
        &self,
        search_id: Uuid,
        from: ResolutionState,
        to: ResolutionState,
    ) -> ResolutionState {
        log::debug!(
            "event=resolution_state module=resolver search_id={} from={} to={}",
            search_id,
            from,
            to
        );
        to
    }

    fn found(
        &self,
        search_id: Uuid,
        name: &str,
        resolved: ResolvedRaga,
        attempt: usize,
    ) -> ResolutionOutcome {

        log::info!(
            "event=raga_resolved module=resolver status=ok search_id={} tradition={} raga={:?} attempt={}",
            search_id,
            resolved.tradition,
            resolved.raga_name(),
            attempt
        );
        self.event_bus.emit(RagaResolved::new(
            search_id,
            name.to_string(),
            resolved.tradition,
            resolved.record.id(),
            resolved.raga_name().to_string(),
            attempt,
        ));

        ResolutionOutcome::Found(resolved)
    }

    fn record_failure(&self, search_id: Uuid, tradition: Tradition, error: &LookupError) {
        log::warn!(
            "event=catalog_lookup_failed module=resolver status=error search_id={} tradition={} not_found={} message={:?}",
            search_id,
            tradition,
            error.is_not_found(),
            error.message()
        );
        self.event_bus.emit(CatalogLookupFailed::new(
            search_id,
            tradition,
            error.is_not_found(),
            error.message().to_string(),
        ));
    }

    fn cancelled(&self, search_id: Uuid, name: &str, state: ResolutionState) {
        log::info!(
            "event=search_cancelled module=resolver search_id={} state={}",
            search_id,
            state
        );
        self.event_bus
            .emit(RagaSearchCancelled::new(search_id, name.to_string()));
    }
}
