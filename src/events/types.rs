// events/types.rs
//
// Domain events outside the search flow.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No credentials, tokens or message bodies in event payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// ARCHIVE EVENTS
// ============================================================================

/// Emitted after the archive listing has been fetched and decoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSessionsLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub total_files: usize,
    pub linked_files: usize,
}

impl ArchiveSessionsLoaded {
    pub fn new(total_files: usize, linked_files: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            total_files,
            linked_files,
        }
    }
}

impl DomainEvent for ArchiveSessionsLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ArchiveSessionsLoaded" }
}

// ============================================================================
// ACCOUNT EVENTS
// ============================================================================

/// Emitted when the backend accepts a login and returns a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoggedIn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub username: String,
}

impl UserLoggedIn {
    pub fn new(username: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            username,
        }
    }
}

impl DomainEvent for UserLoggedIn {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserLoggedIn" }
}

/// Emitted when an account has been created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedUp {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub login_name: String,
}

impl UserSignedUp {
    pub fn new(login_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            login_name,
        }
    }
}

impl DomainEvent for UserSignedUp {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserSignedUp" }
}

/// Emitted when the backend has stored a feedback form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub email: String,
    pub feedback_chars: usize,
}

impl FeedbackSubmitted {
    pub fn new(email: String, feedback_chars: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            email,
            feedback_chars,
        }
    }
}

impl DomainEvent for FeedbackSubmitted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FeedbackSubmitted" }
}

// ============================================================================
// RAGABOT EVENTS
// ============================================================================

/// Emitted for every prompt that got an answer, local or remote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagaBotAnswered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub prompt_chars: usize,
    pub answered_locally: bool,
}

impl RagaBotAnswered {
    pub fn new(prompt_chars: usize, answered_locally: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            prompt_chars,
            answered_locally,
        }
    }
}

impl DomainEvent for RagaBotAnswered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "RagaBotAnswered" }
}
