// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod archive;
pub mod carnatic_catalog;
pub mod chat;
pub mod feedback;
pub mod membership;
pub mod pagination;
pub mod query;
pub mod raga;
pub mod resolution;
pub mod swara;
pub mod tradition;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Tradition
pub use tradition::{Tradition, TraditionSelection};

// Raga records
pub use raga::{CarnaticRaga, HindustaniRaga, RagaRecord};

// Search query
pub use query::{contains_blocked_word, validate_query, RagaQuery};

// Membership heuristic
pub use membership::TraditionMembership;

// Carnatic browse index
pub use carnatic_catalog::carnatic_raga_names;

// Swara expansion
pub use swara::{expand_swara_value, swara_full_name};

// Resolution value objects
pub use resolution::{LookupFailure, ResolutionOutcome, ResolutionState, ResolvedRaga};

// Archive sessions
pub use archive::{MediaCategory, SessionFile};

// Feedback & accounts
pub use feedback::{validate_feedback, validate_signup, FeedbackForm, LoginCredentials, SignupForm};

// Chat
pub use chat::{ChatPrompt, ChatScreening};

// Pagination
pub use pagination::Page;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// User input failed a validation rule; the message is shown as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
