// src/lib.rs
// RagaPro - Carnatic and Hindustani raga reference client
//
// Architecture:
// - Domain-centric: validation, membership and resolution rules live in domain/
// - Event-driven: services report what happened through the event bus
// - Explicit: every catalog call goes through a repository trait
// - Remote-backed: the RagaPro REST API is the only data source
// - Application Layer: the boundary the CLI (or any other shell) talks to

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    expand_swara_value,
    validate_feedback,
    validate_query,
    validate_signup,
    // Records
    CarnaticRaga,
    // Chat
    ChatPrompt,
    ChatScreening,
    DomainError,
    // Accounts & feedback
    FeedbackForm,
    HindustaniRaga,
    LoginCredentials,
    // Resolution
    LookupFailure,
    // Archive
    MediaCategory,
    Page,
    RagaQuery,
    RagaRecord,
    ResolutionOutcome,
    ResolutionState,
    ResolvedRaga,
    SessionFile,
    SignupForm,
    // Tradition
    Tradition,
    TraditionMembership,
    TraditionSelection,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration & Logging
// ============================================================================

pub use config::{AppConfig, ConfigOverrides};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    ArchiveSessionsLoaded,
    CatalogLookupFailed,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FeedbackSubmitted,
    RagaBotAnswered,
    RagaNotFound,
    RagaResolved,
    RagaSearchCancelled,
    RagaSearchStarted,
    UserLoggedIn,
    UserSignedUp,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    AccountRepository, ArchiveRepository, LookupError, RagaBotRepository, RagaCatalog,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ArchiveListing,
    // Archive
    ArchiveService,
    BrowseFilter,
    // Browse
    CarnaticBrowser,
    CategoryCounts,
    ChatReply,
    // RagaBot
    ChatService,
    // Accounts & feedback
    FeedbackService,
    // Search
    RagaResolver,
    SearchController,
    SearchState,
    SearchStatus,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::RagaApiClient;
