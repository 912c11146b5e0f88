//! HTTP request handlers for the overtime engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    allocate_day, allocate_week_for, summarize_week_pay, validate_entries, validate_job_split,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{RateSchedule, TimeEntry, WorkWeek};

use super::request::{DayAllocationRequest, WeekCalculationRequest, WorkerRequest, convert_entries};
use super::response::{ApiError, ApiErrorResponse, DayAllocationResponse, WeekCalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/weeks/calculate", post(calculate_week_handler))
        .route("/days/allocate", post(allocate_day_handler))
        .with_state(state)
}

/// Handler for POST /weeks/calculate.
///
/// Read-only weekly summary: categorizes the worker's week and prices it.
async fn calculate_week_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeekCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing week calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let worker_id = request.worker.id.clone();
    let entries_count = request.entries.len();
    let start_time = Instant::now();

    match perform_week_calculation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %worker_id,
                entries_count,
                weekly_total = %result.calculation.weekly_total,
                total_pay = %result.pay.total_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Week calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /days/allocate.
///
/// Bulk multi-job submission: categorizes the day within its week, then
/// splits the day's categories across the submitted job entries.
async fn allocate_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<DayAllocationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let worker_id = request.worker.id.clone();
    let date = request.date;
    let start_time = Instant::now();

    match perform_day_allocation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %worker_id,
                date = %date,
                jobs_count = result.allocations.len(),
                day_total = %result.day.total_hours,
                duration_us = start_time.elapsed().as_micros(),
                "Day allocation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Calculates and prices the week containing `request.week_of`.
fn perform_week_calculation(
    request: WeekCalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<WeekCalculationResponse> {
    let worker_id = request.worker.id.clone();
    let settings = request
        .settings
        .unwrap_or_else(|| config.settings().clone());

    let entries = convert_entries(request.entries, &worker_id)?;
    validate_entries(&entries, config.overtime().max_daily_hours)?;

    let week = WorkWeek::containing(request.week_of, config.overtime().week_starts_on);
    let rates = resolve_rates(request.worker, &week, config)?;

    let calculation = allocate_week_for(&week, &entries, &settings);
    let pay = summarize_week_pay(&calculation, &rates);

    Ok(WeekCalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        worker_id,
        week,
        calculation,
        pay,
    })
}

/// Categorizes `request.date` with the submitted job entries appended to the
/// worker's recorded entries, then splits the day across those job entries.
///
/// Recorded entries on `request.date` are superseded by the submission.
fn perform_day_allocation(
    request: DayAllocationRequest,
    config: &ConfigLoader,
) -> EngineResult<DayAllocationResponse> {
    let worker_id = request.worker.id.clone();
    let date = request.date;
    let settings = request
        .settings
        .unwrap_or_else(|| config.settings().clone());

    let jobs = convert_entries(request.job_entries, &worker_id)?;
    if jobs.is_empty() {
        return Err(EngineError::InvalidEntry {
            entry_id: "job_entries".to_string(),
            message: format!("at least one job entry is required for {}", date),
        });
    }
    if let Some(job) = jobs.iter().find(|job| job.date != date) {
        return Err(EngineError::InvalidEntry {
            entry_id: job.id.clone(),
            message: format!("job entry is dated {}, expected {}", job.date, date),
        });
    }
    if let Some(day_total) = request.day_total {
        validate_job_split(date, day_total, &jobs)?;
    }

    let mut entries: Vec<TimeEntry> = convert_entries(request.existing_entries, &worker_id)?
        .into_iter()
        .filter(|entry| entry.date != date)
        .collect();
    entries.extend(jobs.iter().cloned());
    validate_entries(&entries, config.overtime().max_daily_hours)?;

    let week = WorkWeek::containing(date, config.overtime().week_starts_on);
    let rates = resolve_rates(request.worker, &week, config)?;

    let calculation = allocate_week_for(&week, &entries, &settings);
    let day = calculation.day(date).cloned().unwrap_or_default();
    let allocations = allocate_day(&day, &jobs, &rates);

    Ok(DayAllocationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        worker_id,
        date,
        day,
        allocations,
    })
}

/// The request's rates, or the configured schedule effective at the week start.
fn resolve_rates(
    worker: WorkerRequest,
    week: &WorkWeek,
    config: &ConfigLoader,
) -> EngineResult<RateSchedule> {
    match worker.rates {
        Some(rates) => Ok(rates),
        None => config
            .get_rate_schedule(&worker.id, week.start_date)
            .cloned(),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
