// src/services/archive_service.rs
//
// Archived sessions: fetch, keep linkable files, filter by category, page.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{MediaCategory, Page, SessionFile};
use crate::error::AppResult;
use crate::events::{ArchiveSessionsLoaded, EventBus};
use crate::repositories::ArchiveRepository;

pub const ARCHIVE_PAGE_SIZE: usize = 6;

/// Per-category totals over the filtered set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub pdf: usize,
    pub audio: usize,
    pub video: usize,
}

impl CategoryCounts {
    fn tally(files: &[SessionFile]) -> Self {
        files.iter().fold(Self::default(), |mut counts, file| {
            counts.all += 1;
            match file.category() {
                MediaCategory::Pdf => counts.pdf += 1,
                MediaCategory::Audio => counts.audio += 1,
                MediaCategory::Video => counts.video += 1,
                MediaCategory::All | MediaCategory::Other => {}
            }
            counts
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveListing {
    pub category: MediaCategory,
    pub counts: CategoryCounts,
    pub page: Page<SessionFile>,
}

impl ArchiveListing {
    /// Filter linkable `files` by `category`, then take page `page`
    pub fn build(files: &[SessionFile], category: MediaCategory, page: usize) -> Self {
        let visible: Vec<SessionFile> = files
            .iter()
            .filter(|file| file.has_link() && category.admits(file.category()))
            .cloned()
            .collect();

        Self {
            category,
            counts: CategoryCounts::tally(&visible),
            page: Page::slice(&visible, page, ARCHIVE_PAGE_SIZE),
        }
    }
}

pub struct ArchiveService {
    archive_repo: Arc<dyn ArchiveRepository>,
    event_bus: Arc<EventBus>,
}

impl ArchiveService {
    pub fn new(archive_repo: Arc<dyn ArchiveRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            archive_repo,
            event_bus,
        }
    }

    /// Every archived file that carries data
    pub async fn load(&self) -> AppResult<Vec<SessionFile>> {
        let files = self.archive_repo.list_with_data().await.map_err(|error| {
            log::warn!(
                "event=archive_load module=archive status=error message={:?}",
                error.user_message()
            );
            error
        })?;

        let linked = files.iter().filter(|file| file.has_link()).count();
        log::info!(
            "event=archive_load module=archive status=ok total={} linked={}",
            files.len(),
            linked
        );
        self.event_bus
            .emit(ArchiveSessionsLoaded::new(files.len(), linked));

        Ok(files)
    }

    pub async fn list(&self, category: MediaCategory, page: usize) -> AppResult<ArchiveListing> {
        let files = self.load().await?;
        Ok(ArchiveListing::build(&files, category, page))
    }
}
