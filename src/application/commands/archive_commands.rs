// src/application/commands/archive_commands.rs
//
// Archive Command Handlers

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::domain::MediaCategory;

/// List archived sessions for one category tab
pub async fn list_archive(
    category: String,
    page: usize,
    state: &AppState,
) -> Result<ArchivePageDto, String> {
    let category: MediaCategory = category.parse()?;

    let listing = state
        .archive_service
        .list(category, page)
        .await
        .to_error_response()?;

    Ok(ArchivePageDto::from(listing))
}
