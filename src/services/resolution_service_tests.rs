// src/services/resolution_service_tests.rs
//
// RagaResolver behaviour against a scripted catalog.
//
// COVERED:
// - Call count and order per selection
// - Membership bias when both traditions are enabled
// - Fallback after a failed first tradition (not-found or transport)
// - Found results tagged with the queried catalog
// - Failure aggregation in attempt order
// - Repeatability for an unchanged backend
// - Cancellation of an in-flight lookup

#[cfg(test)]
mod resolver_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use tokio::sync::Notify;
    use tokio_util::sync::CancellationToken;

    use crate::domain::{
        CarnaticRaga, HindustaniRaga, LookupFailure, RagaQuery, RagaRecord, ResolutionOutcome,
        Tradition, TraditionSelection,
    };
    use crate::events::{CatalogLookupFailed, EventBus, RagaResolved};
    use crate::repositories::{LookupError, MockRagaCatalog, RagaCatalog};
    use crate::services::resolution_service::RagaResolver;

    fn carnatic(id: i64, name: &str) -> RagaRecord {
        RagaRecord::Carnatic(CarnaticRaga {
            id,
            raga_name: name.to_string(),
            ..Default::default()
        })
    }

    fn hindustani(id: i64, name: &str) -> RagaRecord {
        RagaRecord::Hindustani(HindustaniRaga {
            id,
            raga_name: name.to_string(),
            ..Default::default()
        })
    }

    fn query(raw: &str) -> RagaQuery {
        RagaQuery::parse(raw).unwrap()
    }

    fn resolver(catalog: MockRagaCatalog) -> (RagaResolver, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (RagaResolver::new(Arc::new(catalog), Arc::clone(&bus)), bus)
    }

    fn not_found() -> LookupError {
        LookupError::NotFound("HTTP 404".to_string())
    }

    // ========================================================================
    // SCENARIOS
    // ========================================================================

    #[tokio::test]
    async fn test_kalyani_resolves_from_carnatic_in_one_call() {
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Kalyani"))
            .times(1)
            .returning(|_, _| Ok(carnatic(65, "Kalyani")));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Kalyani"))
            .times(0);

        let (resolver, bus) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("Kalyani"), TraditionSelection::both())
            .await;

        let resolved = outcome.resolved().expect("Kalyani should resolve");
        assert_eq!(resolved.tradition, Tradition::Carnatic);
        assert_eq!(resolved.raga_name(), "Kalyani");

        let log = bus.get_event_log();
        let types: Vec<&str> = log.iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(types, vec!["RagaSearchStarted", "RagaResolved"]);
    }

    #[tokio::test]
    async fn test_bhairavi_falls_back_to_carnatic_after_hindustani_404() {
        let mut seq = Sequence::new();
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Bhairavi"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(not_found()));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Bhairavi"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(carnatic(20, "Bhairavi")));

        let (resolver, bus) = resolver(catalog);
        let resolved_events = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&resolved_events);
        bus.subscribe::<RagaResolved, _>(move |event| {
            assert_eq!(event.tradition, Tradition::Carnatic);
            assert_eq!(event.attempt, 2);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let outcome = resolver
            .resolve(&query("Bhairavi"), TraditionSelection::both())
            .await;

        assert_eq!(outcome.resolved().unwrap().tradition, Tradition::Carnatic);
        assert_eq!(resolved_events.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bhairavi_falls_back_after_hindustani_transport_error() {
        let mut seq = Sequence::new();
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Bhairavi"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(LookupError::Transport("connection refused".to_string())));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Bhairavi"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(carnatic(20, "Bhairavi")));

        let (resolver, bus) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("Bhairavi"), TraditionSelection::both())
            .await;

        let resolved = outcome.resolved().expect("Carnatic should answer");
        assert_eq!(resolved.tradition, Tradition::Carnatic);
        assert_eq!(resolved.raga_name(), "Bhairavi");

        let types: Vec<String> = bus
            .get_event_log()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(
            types,
            vec!["RagaSearchStarted", "CatalogLookupFailed", "RagaResolved"]
        );
    }

    #[tokio::test]
    async fn test_record_from_other_tradition_counts_as_failure() {
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Todi"))
            .times(1)
            .returning(|_, _| Ok(hindustani(9, "Todi")));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Todi"))
            .times(0);

        let (resolver, _) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("Todi"), TraditionSelection::only(Tradition::Carnatic))
            .await;

        assert!(!outcome.is_found());
        assert_eq!(
            outcome.failures(),
            &[LookupFailure::new(
                Tradition::Carnatic,
                "Carnatic catalog returned a Hindustani record"
            )]
        );
    }

    #[tokio::test]
    async fn test_mismatched_record_falls_back_to_other_catalog() {
        let mut seq = Sequence::new();
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Kalyani"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(hindustani(4, "Kalyani")));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Kalyani"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(hindustani(4, "Kalyani")));

        let (resolver, _) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("Kalyani"), TraditionSelection::both())
            .await;

        assert_eq!(outcome.resolved().unwrap().tradition, Tradition::Hindustani);
    }

    #[tokio::test]
    async fn test_unknown_raga_reports_both_failures_in_order() {
        let mut seq = Sequence::new();
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Zzznotaraga"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(LookupError::NotFound("Raga not found".to_string())));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Zzznotaraga"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(LookupError::Transport("connection refused".to_string())));

        let (resolver, bus) = resolver(catalog);
        let failed_events = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&failed_events);
        bus.subscribe::<CatalogLookupFailed, _>(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let outcome = resolver
            .resolve(&query("Zzznotaraga"), TraditionSelection::both())
            .await;

        assert_eq!(
            outcome,
            ResolutionOutcome::NotFound {
                query: "Zzznotaraga".to_string(),
                failures: vec![
                    LookupFailure::new(Tradition::Carnatic, "Raga not found"),
                    LookupFailure::new(Tradition::Hindustani, "connection refused"),
                ],
            }
        );
        assert_eq!(failed_events.load(Ordering::SeqCst), 2);
        assert!(outcome
            .message()
            .unwrap()
            .contains("in the Hindustani or Carnatic catalogs"));
    }

    #[tokio::test]
    async fn test_todi_with_carnatic_only_never_falls_back() {
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Todi"))
            .times(1)
            .returning(|_, _| Err(not_found()));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Todi"))
            .times(0);

        let (resolver, _) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("Todi"), TraditionSelection::only(Tradition::Carnatic))
            .await;

        assert_eq!(outcome.failures().len(), 1);
        assert_eq!(outcome.failures()[0].tradition, Tradition::Carnatic);
        assert_eq!(
            outcome.message().unwrap(),
            "Could not find raga \"Todi\" in the Carnatic catalog. HTTP 404"
        );
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    #[tokio::test]
    async fn test_single_selection_issues_exactly_one_call() {
        for tradition in Tradition::ALL {
            let mut catalog = MockRagaCatalog::new();
            catalog
                .expect_lookup()
                .withf(move |t, _| *t == tradition)
                .times(1)
                .returning(|_, _| Err(not_found()));
            catalog
                .expect_lookup()
                .withf(move |t, _| *t != tradition)
                .times(0);

            let (resolver, _) = resolver(catalog);
            let outcome = resolver
                .resolve(&query("Yaman"), TraditionSelection::only(tradition))
                .await;
            assert_eq!(outcome.failures().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_member_query_tries_hindustani_first() {
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("yaman"))
            .times(1)
            .returning(|_, _| Ok(hindustani(7, "Yaman")));

        let (resolver, _) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("yaman"), TraditionSelection::both())
            .await;

        assert_eq!(outcome.resolved().unwrap().tradition, Tradition::Hindustani);
    }

    #[tokio::test]
    async fn test_empty_selection_behaves_like_both() {
        let mut seq = Sequence::new();
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .with(eq(Tradition::Carnatic), eq("Mohanam"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(not_found()));
        catalog
            .expect_lookup()
            .with(eq(Tradition::Hindustani), eq("Mohanam"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(not_found()));

        let (resolver, _) = resolver(catalog);
        let outcome = resolver
            .resolve(&query("Mohanam"), TraditionSelection::none())
            .await;

        assert_eq!(outcome.failures().len(), 2);
    }

    #[tokio::test]
    async fn test_same_input_same_outcome() {
        let mut catalog = MockRagaCatalog::new();
        catalog
            .expect_lookup()
            .times(4)
            .returning(|tradition, name| match tradition {
                Tradition::Hindustani => Err(LookupError::NotFound(format!("{} missing", name))),
                Tradition::Carnatic => Ok(carnatic(20, name)),
            });

        let (resolver, _) = resolver(catalog);
        let first = resolver
            .resolve(&query("Bhairavi"), TraditionSelection::both())
            .await;
        let second = resolver
            .resolve(&query("Bhairavi"), TraditionSelection::both())
            .await;

        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_order() {
        let (resolver, _) = resolver(MockRagaCatalog::new());

        assert_eq!(
            resolver.plan_order(&query("Bhairavi"), TraditionSelection::both()),
            vec![Tradition::Hindustani, Tradition::Carnatic]
        );
        assert_eq!(
            resolver.plan_order(&query("Kalyani"), TraditionSelection::both()),
            vec![Tradition::Carnatic, Tradition::Hindustani]
        );
        assert_eq!(
            resolver.plan_order(&query("Bhairavi"), TraditionSelection::only(Tradition::Carnatic)),
            vec![Tradition::Carnatic]
        );
    }

    // ========================================================================
    // CANCELLATION
    // ========================================================================

    /// Signals when a lookup starts, then never completes
    struct HangingCatalog {
        entered: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RagaCatalog for HangingCatalog {
        async fn lookup(&self, _: Tradition, _: &str) -> Result<RagaRecord, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_cancel_drops_in_flight_lookup() {
        let entered = Arc::new(Notify::new());
        let catalog = Arc::new(HangingCatalog {
            entered: Arc::clone(&entered),
            calls: AtomicUsize::new(0),
        });
        let bus = Arc::new(EventBus::new());
        let resolver = Arc::new(RagaResolver::new(catalog.clone(), Arc::clone(&bus)));

        let token = CancellationToken::new();
        let child = token.clone();
        let task_resolver = Arc::clone(&resolver);
        let handle = tokio::spawn(async move {
            task_resolver
                .resolve_cancellable(&query("Kalyani"), TraditionSelection::both(), &child)
                .await
        });

        entered.notified().await;
        token.cancel();

        assert!(handle.await.unwrap().is_none());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);

        let last = bus.get_event_log().pop().unwrap();
        assert_eq!(last.event_type, "RagaSearchCancelled");
    }

    #[tokio::test]
    async fn test_cancelled_token_makes_no_calls() {
        let mut catalog = MockRagaCatalog::new();
        catalog.expect_lookup().times(0);

        let (resolver, _) = resolver(catalog);
        let token = CancellationToken::new();
        token.cancel();

        let outcome = resolver
            .resolve_cancellable(&query("Kalyani"), TraditionSelection::both(), &token)
            .await;
        assert!(outcome.is_none());
    }
}
