// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod resolution_events;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Archive
    ArchiveSessionsLoaded,
    // Accounts
    FeedbackSubmitted,
    UserLoggedIn,
    UserSignedUp,
    // RagaBot
    RagaBotAnswered,
};

pub use bus::{EventBus, EventLogEntry};

// Search flow
pub use resolution_events::{
    CatalogLookupFailed, RagaNotFound, RagaResolved, RagaSearchCancelled, RagaSearchStarted,
};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
