// src/application/commands/search_commands.rs
//
// Raga Search Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{dto::*, state::AppState};
use crate::services::SearchState;

/// Run one search. `None` when a newer search superseded this one.
pub async fn search_raga(
    request: SearchRequestDto,
    state: &AppState,
) -> Option<SearchResultDto> {
    let search = SearchState::new(request.query.clone(), request.selection());

    let finished = state.search_controller.search(search).await;

    finished.map(SearchResultDto::from)
}

/// Cancel the in-flight search, if any
pub fn cancel_search(state: &AppState) {
    state.search_controller.cancel();
}
