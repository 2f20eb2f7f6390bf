// src/repositories/mod.rs
//
// Repository layer
//
// Every repository here is backed by the remote RagaPro REST API; the HTTP
// implementations live in `integrations::raga_api`.
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO validation
// - NO event emission
// - NO cross-repository calls

pub mod account_repository;
pub mod archive_repository;
pub mod raga_catalog;
pub mod ragabot_repository;

pub use account_repository::AccountRepository;
pub use archive_repository::ArchiveRepository;
pub use raga_catalog::{LookupError, RagaCatalog};
pub use ragabot_repository::RagaBotRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use archive_repository::MockArchiveRepository;
#[cfg(test)]
pub use raga_catalog::MockRagaCatalog;
#[cfg(test)]
pub use ragabot_repository::MockRagaBotRepository;
