// src/services/feedback_service.rs
//
// Accounts and feedback.
//
// The login token lives only in memory, for the lifetime of the service.
// Feedback is validated locally before the token is even checked.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{validate_feedback, validate_signup, FeedbackForm, LoginCredentials, SignupForm};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FeedbackSubmitted, UserLoggedIn, UserSignedUp};
use crate::repositories::AccountRepository;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Admin login required to submit feedback.";
pub const LOGGED_IN_MESSAGE: &str = "Logged in. You can now submit feedback.";
pub const SIGNED_UP_MESSAGE: &str = "Signup successful. You may now login.";
pub const FEEDBACK_THANKS_MESSAGE: &str = "Thank you 🙏! Your feedback has been submitted.";

pub struct FeedbackService {
    account_repo: Arc<dyn AccountRepository>,
    event_bus: Arc<EventBus>,
    token: Mutex<Option<String>>,
}

impl FeedbackService {
    pub fn new(account_repo: Arc<dyn AccountRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            account_repo,
            event_bus,
            token: Mutex::new(None),
        }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<()> {
        let token = self.account_repo.login(credentials).await.map_err(|error| {
            log::warn!(
                "event=login module=feedback status=error username={:?} message={:?}",
                credentials.username,
                error.user_message()
            );
            error
        })?;

        *self.session() = Some(token);

        log::info!(
            "event=login module=feedback status=ok username={:?}",
            credentials.username
        );
        self.event_bus
            .emit(UserLoggedIn::new(credentials.username.clone()));
        Ok(())
    }

    pub fn logout(&self) {
        *self.session() = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    pub async fn signup(&self, form: &SignupForm) -> AppResult<()> {
        validate_signup(form)?;

        self.account_repo.signup(form).await?;

        log::info!(
            "event=signup module=feedback status=ok login_name={:?}",
            form.login_name
        );
        self.event_bus
            .emit(UserSignedUp::new(form.login_name.clone()));
        Ok(())
    }

    pub async fn submit(&self, form: &FeedbackForm) -> AppResult<()> {
        validate_feedback(form)?;

        let token = self
            .session()
            .clone()
            .ok_or_else(|| AppError::Unauthorized(LOGIN_REQUIRED_MESSAGE.to_string()))?;

        self.account_repo
            .submit_feedback(form, &token)
            .await
            .map_err(|error| {
                log::warn!(
                    "event=feedback_submit module=feedback status=error message={:?}",
                    error.user_message()
                );
                AppError::Other(format!("Could not submit feedback. {}", error.user_message()))
            })?;

        log::info!("event=feedback_submit module=feedback status=ok");
        self.event_bus.emit(FeedbackSubmitted::new(
            form.email.clone(),
            form.feedback.chars().count(),
        ));
        Ok(())
    }

    fn session(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
