//! Response types for the overtime engine API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    CalculatedHours, JobEntryAllocation, WeeklyCalculation, WeeklyPaySummary, WorkWeek,
};

/// Response body for the `/weeks/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekCalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The worker the week belongs to.
    pub worker_id: String,
    /// The calendar week calculated.
    pub week: WorkWeek,
    /// Per-day and weekly category hours with the audit trail.
    pub calculation: WeeklyCalculation,
    /// Weekly pay totals.
    pub pay: WeeklyPaySummary,
}

/// Response body for the `/days/allocate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAllocationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The worker the day belongs to.
    pub worker_id: String,
    /// The day allocated.
    pub date: NaiveDate,
    /// The day's finalized category hours.
    pub day: CalculatedHours,
    /// Each job entry's share of the day.
    pub allocations: Vec<JobEntryAllocation>,
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

    fn unprocessable(error: ApiError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
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
            EngineError::RateNotFound { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "RATE_NOT_FOUND",
                    message,
                    "Supply worker.rates or add the worker to a rate file effective on this date",
                ),
            ),
            EngineError::InvalidEntry { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_ENTRY",
                    message,
                    "Each entry needs a date with hours, or clock_in and clock_out; \
                     day allocations need at least one job entry dated on the allocation date",
                ),
            ),
            // Not reachable from a request body: converted entries all carry worker.id.
            EngineError::MixedWorkers { .. } => ApiErrorResponse::bad_request(
                ApiError::new("MIXED_WORKERS", message),
            ),
            EngineError::NegativeHours { .. } => {
                ApiErrorResponse::unprocessable(ApiError::new("NEGATIVE_HOURS", message))
            }
            EngineError::DailyHoursExceeded { .. } => {
                ApiErrorResponse::unprocessable(ApiError::new("DAILY_HOURS_EXCEEDED", message))
            }
            EngineError::AllocationMismatch { .. } => {
                ApiErrorResponse::unprocessable(ApiError::new("ALLOCATION_MISMATCH", message))
            }
        }
    }
}
