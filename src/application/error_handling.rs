// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides one error format for every command
// - User-facing text (validation, backend bodies) passes through verbatim
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Missing or rejected login (401)
    Unauthorized,

    /// Backend or network failure (502)
    ExternalService,

    /// Bad configuration
    Configuration,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        let message = error.user_message();

        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(DomainError::Validation(_)) => {
                Self::new(ErrorType::Validation, message, None)
            }

            AppError::Domain(DomainError::NotFound(_)) => {
                Self::new(ErrorType::NotFound, message, None)
            }

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Unauthorized(_) => Self::new(ErrorType::Unauthorized, message, None),

            AppError::Backend { status, .. } => {
                log::warn!("event=command_error kind=backend status={} message={:?}", status, message);
                Self::new(
                    ErrorType::ExternalService,
                    message,
                    Some(format!("HTTP {}", status)),
                )
            }

            AppError::Http(http_error) => {
                log::error!("event=command_error kind=http error={:?}", http_error);
                Self::new(
                    ErrorType::ExternalService,
                    "Could not reach the RagaPro server",
                    Some(http_error.to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("event=command_error kind=serialization error={:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("event=command_error kind=io error={:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Config(detail) => Self::new(
                ErrorType::Configuration,
                "Invalid configuration",
                Some(detail),
            ),

            AppError::Other(_) => {
                log::debug!("event=command_error kind=other message={:?}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
