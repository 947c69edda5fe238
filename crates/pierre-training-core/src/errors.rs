// ABOUTME: Unified error types with error codes and user-facing message formatting
// ABOUTME: Maps transport failures and backend rejections onto one error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! [`ErrorCode`] groups mirror the backend's HTTP semantics so a rejected
//! update can be reported to the user with the backend's own wording.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Authentication & Authorization (1000-1999)
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied = 1004,

    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    #[serde(rename = "RESOURCE_LOCKED")]
    ResourceLocked = 4002,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Internal Errors (9000-9999)
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code this error corresponds to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => 400,
            Self::AuthInvalid => 401,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::ResourceLocked => 409,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceLocked => "The resource is currently locked and cannot be modified",
            Self::ExternalServiceError => "The training service encountered an error",
            Self::ExternalServiceUnavailable => "The training service is currently unreachable",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this error came from the network rather than from the backend's verdict
    #[must_use]
    pub const fn is_transport(self) -> bool {
        matches!(self, Self::ExternalServiceUnavailable)
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlating with backend logs
    pub request_id: Option<Uuid>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            source: None,
        }
    }

    /// Attach the request ID that produced this error
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Message suitable for showing to the person editing the training
    ///
    /// Backend rejections already carry readable text, so the message is used
    /// as-is; everything else falls back to the code's description when the
    /// message is empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.message.trim().is_empty() {
            self.code.description().to_owned()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for common errors
impl AppError {
    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource can no longer be modified
    pub fn locked(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceLocked, message)
    }

    /// The backend could not be reached
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceUnavailable, message)
    }

    /// Map a rejected HTTP response onto the error taxonomy
    ///
    /// `body` is the raw response body; FastAPI-style `detail` payloads are
    /// turned into a readable message via [`format_api_detail`].
    #[must_use]
    pub fn from_http_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| format_api_detail(&value));
        let message = detail.unwrap_or_else(|| format!("Request failed with status {status}"));

        let code = match status {
            400 | 422 => ErrorCode::InvalidInput,
            401 => ErrorCode::AuthInvalid,
            403 => ErrorCode::PermissionDenied,
            404 => ErrorCode::ResourceNotFound,
            409 => ErrorCode::ResourceLocked,
            _ => ErrorCode::ExternalServiceError,
        };
        Self::new(code, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Fallback shown when a validation payload has no usable entries
const VALIDATION_FALLBACK: &str = "Validation error";

/// Format a backend error body into a single displayable message
///
/// Handles `{"detail": "text"}` and the validation list form
/// `{"detail": [{"loc": ["body", "field"], "msg": "..."}]}`, where entries are
/// rendered as `field: msg` and joined with `"; "`. Returns `None` when the
/// body carries no `detail`.
#[must_use]
pub fn format_api_detail(body: &serde_json::Value) -> Option<String> {
    let detail = body.get("detail")?;
    match detail {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(entries) => {
            let formatted: Vec<String> = entries
                .iter()
                .filter_map(serde_json::Value::as_object)
                .map(|entry| {
                    let field = entry
                        .get("loc")
                        .and_then(serde_json::Value::as_array)
                        .and_then(|loc| loc.iter().skip(1).last())
                        .map(|segment| match segment {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        });
                    let message = entry
                        .get("msg")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or(VALIDATION_FALLBACK);
                    field.map_or_else(|| message.to_owned(), |f| format!("{f}: {message}"))
                })
                .collect();
            if formatted.is_empty() {
                Some(VALIDATION_FALLBACK.to_owned())
            } else {
                Some(formatted.join("; "))
            }
        }
        serde_json::Value::Null => None,
        _ => Some(VALIDATION_FALLBACK.to_owned()),
    }
}
