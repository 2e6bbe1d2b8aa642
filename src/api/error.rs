//! Handler errors and their HTTP status mapping

use std::fmt;

use serde::Serialize;

/// Kinds of record a handler looks up by ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// An ingested property
    Property,
    /// A property's current brief
    Brief,
    /// A user contribution
    Contribution,
}

/// Error classes, each with a fixed HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A property, brief or contribution does not exist (404)
    NotFound,
    /// The request is malformed or fails validation (400)
    BadRequest,
    /// The request clashes with current state, e.g. re-reviewing (409)
    Conflict,
    /// Store or collaborator failure (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this class
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }

    /// Stable identifier used in JSON error bodies
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// A failed handler call
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error class (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable explanation
    pub message: String,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// No record of `resource` kind exists for `id`
    ///
    /// Briefs are keyed by property, so `id` is a property ID for them.
    #[must_use]
    pub fn missing(resource: Resource, id: u64) -> Self {
        let message = match resource {
            Resource::Property => format!("Property {id} not found"),
            Resource::Brief => format!("Brief not found for property {id}"),
            Resource::Contribution => format!("Contribution {id} not found"),
        };
        Self::new(ErrorCode::NotFound, message)
    }

    /// The request failed validation
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// The request is valid but the target's state forbids it
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        log::error!("handler failed: {err:#}");
        Self::new(ErrorCode::Internal, format!("{err:#}"))
    }
}

/// JSON shape of an error inside [`super::ApiResponse`]
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorData {
    /// Value of [`ErrorCode::as_str`]
    pub code: &'static str,
    /// Human-readable explanation
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str(),
            message: err.message.clone(),
        }
    }
}
