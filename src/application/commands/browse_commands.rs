// src/application/commands/browse_commands.rs
//
// Carnatic Browse Command Handlers

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::services::BrowseFilter;

/// One page of the alphabetical Carnatic index
pub fn browse_carnatic(request: BrowseRequestDto, state: &AppState) -> BrowsePageDto {
    let filter = BrowseFilter {
        letter: request.letter,
        text: request.text.clone(),
        page: request.page,
    };

    BrowsePageDto {
        letters: state.browser.letters(),
        letter: request.letter,
        text: request.text,
        names: state.browser.page(&filter),
    }
}

/// Load the card for a name picked from the index
pub async fn show_carnatic_raga(name: String, state: &AppState) -> Result<RagaCardDto, String> {
    let record = state.browser.select(&name).await.to_error_response()?;

    Ok(RagaCardDto::from(record))
}
