// src/repositories/archive_repository.rs
//
// Archived session files.

use async_trait::async_trait;

use crate::domain::SessionFile;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArchiveRepository: Send + Sync {
    /// Every archived file that carries data, in backend order
    async fn list_with_data(&self) -> AppResult<Vec<SessionFile>>;
}
