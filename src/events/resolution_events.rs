// src/events/resolution_events.rs
//
// Resolution Events
//
// Emitted by RagaResolver while one search runs. Every event of a search
// carries the same `search_id`, so subscribers can group them.
//
// CRITICAL INVARIANTS:
// - Event IDs are derived from (search_id, event kind, tradition), so one
//   search never emits two events with the same ID
// - RagaSearchStarted comes first; exactly one of RagaResolved, RagaNotFound
//   or RagaSearchCancelled comes last
// - Payloads never carry raw record bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Tradition;
use crate::events::DomainEvent;

fn derived_id(search_id: Uuid, kind: &str, tradition: Option<Tradition>) -> Uuid {
    let key = match tradition {
        Some(tradition) => format!("{}:{}", kind, tradition),
        None => kind.to_string(),
    };
    Uuid::new_v5(&search_id, key.as_bytes())
}

// ============================================================================
// SEARCH STARTED
// ============================================================================

/// A validated query entered the resolver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagaSearchStarted {
    pub search_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,

    /// Traditions in the order they will be tried
    pub plan: Vec<Tradition>,
}

impl RagaSearchStarted {
    pub fn new(search_id: Uuid, query: String, plan: Vec<Tradition>) -> Self {
        Self {
            search_id,
            occurred_at: Utc::now(),
            query,
            plan,
        }
    }
}

impl DomainEvent for RagaSearchStarted {
    fn event_id(&self) -> Uuid {
        derived_id(self.search_id, "RagaSearchStarted", None)
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        "RagaSearchStarted"
    }
}

// ============================================================================
// CATALOG LOOKUP FAILED
// ============================================================================

/// One tradition's catalog did not produce a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogLookupFailed {
    pub search_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub tradition: Tradition,
    pub not_found: bool,
    pub message: String,
}

impl CatalogLookupFailed {
    pub fn new(search_id: Uuid, tradition: Tradition, not_found: bool, message: String) -> Self {
        Self {
            search_id,
            occurred_at: Utc::now(),
            tradition,
            not_found,
            message,
        }
    }
}

impl DomainEvent for CatalogLookupFailed {
    fn event_id(&self) -> Uuid {
        derived_id(self.search_id, "CatalogLookupFailed", Some(self.tradition))
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        "CatalogLookupFailed"
    }
}

// ============================================================================
// RAGA RESOLVED
// ============================================================================

/// A catalog returned a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagaResolved {
    pub search_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
    pub tradition: Tradition,
    pub raga_id: i64,
    pub raga_name: String,

    /// 1-based position of the matching tradition in the plan
    pub attempt: usize,
}

impl RagaResolved {
    pub fn new(
        search_id: Uuid,
        query: String,
        tradition: Tradition,
        raga_id: i64,
        raga_name: String,
        attempt: usize,
    ) -> Self {
        Self {
            search_id,
            occurred_at: Utc::now(),
            query,
            tradition,
            raga_id,
            raga_name,
            attempt,
        }
    }
}

impl DomainEvent for RagaResolved {
    fn event_id(&self) -> Uuid {
        derived_id(self.search_id, "RagaResolved", Some(self.tradition))
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        "RagaResolved"
    }
}

// ============================================================================
// RAGA NOT FOUND
// ============================================================================

/// Every tried catalog failed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagaNotFound {
    pub search_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
    pub tried: Vec<Tradition>,
}

impl RagaNotFound {
    pub fn new(search_id: Uuid, query: String, tried: Vec<Tradition>) -> Self {
        Self {
            search_id,
            occurred_at: Utc::now(),
            query,
            tried,
        }
    }
}

impl DomainEvent for RagaNotFound {
    fn event_id(&self) -> Uuid {
        derived_id(self.search_id, "RagaNotFound", None)
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        "RagaNotFound"
    }
}

// ============================================================================
// SEARCH CANCELLED
// ============================================================================

/// The search was superseded or cancelled before it finished.
/// No outcome is published for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagaSearchCancelled {
    pub search_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
}

impl RagaSearchCancelled {
    pub fn new(search_id: Uuid, query: String) -> Self {
        Self {
            search_id,
            occurred_at: Utc::now(),
            query,
        }
    }
}

impl DomainEvent for RagaSearchCancelled {
    fn event_id(&self) -> Uuid {
        derived_id(self.search_id, "RagaSearchCancelled", None)
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        "RagaSearchCancelled"
    }
}
