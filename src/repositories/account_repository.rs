// src/repositories/account_repository.rs
//
// Login, signup and feedback submission.

use async_trait::async_trait;

use crate::domain::{FeedbackForm, LoginCredentials, SignupForm};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Returns the bearer token on success
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<String>;

    async fn signup(&self, form: &SignupForm) -> AppResult<()>;

    async fn submit_feedback(&self, form: &FeedbackForm, token: &str) -> AppResult<()>;
}
