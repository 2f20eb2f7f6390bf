// src/application/commands/chat_commands.rs
//
// RagaBot Command Handlers

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};

pub async fn ask_ragabot(message: String, state: &AppState) -> Result<ChatReplyDto, String> {
    let reply = state
        .chat_service
        .ask(&message)
        .await
        .to_error_response()?;

    Ok(ChatReplyDto::from(reply))
}
