//! Response types for the Talent Assessment Engine API.
//!
//! This module defines the assessment response envelope plus the error
//! response structures and error mapping for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PotentialAssessment, RecommendationList, TrendResult};

/// Full assessment for one employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Personnel identifier of the assessed record.
    pub employee_id: String,
    /// Display name of the assessed record.
    pub name: String,
    /// Performance trend over the review periods.
    pub trend: TrendResult,
    /// Potential classification with narrative.
    pub potential: PotentialAssessment,
    /// Development recommendations.
    pub recommendations: RecommendationList,
}

/// Summary row returned by roster search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Personnel identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position or job title.
    pub position: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a record-not-found error response.
    pub fn record_not_found(id: &str) -> Self {
        Self::with_details(
            "RECORD_NOT_FOUND",
            format!("Employee record not found: {}", id),
            format!("No roster record carries the personnel ID '{}'", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RosterNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster error",
                    format!("Roster file not found: {}", path),
                ),
            },
            EngineError::RosterReadError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster read error",
                    format!("Failed to read {}: {}", path, message),
                ),
            },
            EngineError::RecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::record_not_found(&id),
            },
            EngineError::InvalidRecord { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid employee record: {}", message),
                    "The supplied record is not a valid field mapping",
                ),
            },
        }
    }
}
