//! Response types for the workforce metrics API.
//!
//! This module defines the success bodies that are not plain calculation
//! results, the error body, and the mapping from [`EngineError`] to HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PerformanceScoreResult, TimestampUpdate};
use crate::error::EngineError;
use crate::models::{AuditStep, Task};

/// Response body of `POST /tasks/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvaluationResponse {
    /// The task with any stamped timestamps applied.
    pub task: Task,
    /// The timestamps that were stamped by this save.
    pub update: TimestampUpdate,
    /// Whether the task is past due and still open.
    pub is_overdue: bool,
    /// Actual over estimated hours, as a percentage capped at 100.
    pub progress_percentage: Decimal,
    /// The audit step of the status rule.
    pub audit_step: AuditStep,
}

/// Response body of `POST /time-logs/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLogValidationResponse {
    /// The validated entry id.
    pub id: String,
    /// Always true. Invalid entries are answered with an error.
    pub valid: bool,
    /// Whether the entry is still open.
    pub is_open: bool,
    /// Logged hours, zero while open.
    pub duration_hours: Decimal,
}

/// Response body of `POST /performance/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceScoreResponse {
    /// The employee observed.
    pub employee_id: String,
    /// Per-observation results in request order.
    pub scores: Vec<PerformanceScoreResult>,
    /// Weighted mean of the scored observations by metric weight.
    pub overall_score: Option<Decimal>,
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

    /// Creates a metric not found error response.
    pub fn metric_not_found(id: &str) -> Self {
        Self::with_details(
            "METRIC_NOT_FOUND",
            format!("Performance metric not found: {}", id),
            format!("The metric '{}' is not defined in the metrics catalog", id),
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

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInterval { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_INTERVAL",
                message,
                "A closed time log must end after it starts",
            )),
            EngineError::MissingReferenceData { .. } => {
                Self::bad_request(ApiError::new("MISSING_REFERENCE_DATA", message))
            }
            EngineError::InconsistentMetricBand { .. } => {
                Self::bad_request(ApiError::new("INCONSISTENT_METRIC_BAND", message))
            }
            EngineError::InvalidScheduleEntry { .. } => {
                Self::bad_request(ApiError::new("INVALID_SCHEDULE_ENTRY", message))
            }
            EngineError::InvalidWorkLog { .. } => {
                Self::bad_request(ApiError::new("INVALID_WORK_LOG", message))
            }
            EngineError::MetricNotFound { id } => {
                Self::bad_request(ApiError::metric_not_found(&id))
            }
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_metric_not_found_error() {
        let error = ApiError::metric_not_found("forklift_hours");
        assert_eq!(error.code, "METRIC_NOT_FOUND");
        assert!(error.message.contains("forklift_hours"));
    }

    #[test]
    fn test_invalid_interval_maps_to_400() {
        let engine_error = EngineError::InvalidInterval {
            start: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INTERVAL");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
