// src/application/commands/account_commands.rs
//
// Account & Feedback Command Handlers
//
// RULES:
// - Forms arrive unvalidated; the service validates
// - Success returns the confirmation text the shell displays

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::domain::{FeedbackForm, LoginCredentials, SignupForm};
use crate::services::feedback_service::{
    FEEDBACK_THANKS_MESSAGE, LOGGED_IN_MESSAGE, SIGNED_UP_MESSAGE,
};

pub async fn login(credentials: LoginCredentials, state: &AppState) -> Result<MessageDto, String> {
    state
        .feedback_service
        .login(&credentials)
        .await
        .to_error_response()?;

    Ok(MessageDto::ok(LOGGED_IN_MESSAGE))
}

pub fn logout(state: &AppState) -> MessageDto {
    state.feedback_service.logout();
    MessageDto::ok("Logged out.")
}

pub async fn signup(form: SignupForm, state: &AppState) -> Result<MessageDto, String> {
    state
        .feedback_service
        .signup(&form)
        .await
        .to_error_response()?;

    Ok(MessageDto::ok(SIGNED_UP_MESSAGE))
}

pub async fn submit_feedback(form: FeedbackForm, state: &AppState) -> Result<MessageDto, String> {
    state
        .feedback_service
        .submit(&form)
        .await
        .to_error_response()?;

    Ok(MessageDto::ok(FEEDBACK_THANKS_MESSAGE))
}
