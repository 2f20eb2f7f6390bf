// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the response body, or `HTTP <status>`
    /// when the body was empty.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or rejected credentials
    #[error("{0}")]
    Unauthorized(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// The message a user should see: validation, auth and backend text
    /// verbatim, everything else through `Display`.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain(DomainError::Validation(message)) => message.clone(),
            AppError::Backend { message, .. } => message.clone(),
            AppError::Unauthorized(message) | AppError::Other(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(format!("Invalid config file: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
