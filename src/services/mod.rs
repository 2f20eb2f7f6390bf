// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod archive_service;
pub mod browse_service;
pub mod chat_service;
pub mod feedback_service;
pub mod resolution_service;
pub mod search_session;

#[cfg(test)]
mod resolution_service_tests;

// Re-export all services and their types
pub use archive_service::{ArchiveListing, ArchiveService, CategoryCounts, ARCHIVE_PAGE_SIZE};

pub use browse_service::{BrowseFilter, CarnaticBrowser, BROWSE_PAGE_SIZE};

pub use chat_service::{ChatReply, ChatService};

pub use feedback_service::FeedbackService;

pub use resolution_service::RagaResolver;

pub use search_session::{SearchController, SearchState, SearchStatus};
