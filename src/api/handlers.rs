//! HTTP request handlers for the workforce metrics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    apply_status_change, evaluate_daily_log, is_overdue, progress_percentage, score_observation,
    summarize_productivity, total_scheduled_hours, validate_time_log_entry,
    weighted_overall_score, TaskStatusChange,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};

use super::request::{
    DailyLogRequest, PerformanceScoreRequest, ProductivitySummaryRequest, ScheduleHoursRequest,
    TaskEvaluationRequest, TimeLogValidationRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, PerformanceScoreResponse, TaskEvaluationResponse,
    TimeLogValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/site", get(site_handler))
        .route("/schedules/hours", post(schedule_hours_handler))
        .route("/tasks/evaluate", post(task_evaluation_handler))
        .route("/time-logs/validate", post(time_log_validation_handler))
        .route("/performance/score", post(performance_score_handler))
        .route("/daily-logs/evaluate", post(daily_log_handler))
        .route(
            "/reports/productivity-summary",
            post(productivity_summary_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected by engine rules"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Unwraps the JSON body or builds the 400 response for a rejected one.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Handler for GET /site.
async fn site_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().site())
}

/// Handler for POST /schedules/hours.
async fn schedule_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule hours request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let entry = request.entry;

    if let Err(err) = entry.validate() {
        return engine_error_response(correlation_id, err);
    }

    let result = total_scheduled_hours(&entry, state.config().config().scheduling(), 1);
    info!(
        correlation_id = %correlation_id,
        entry_id = %entry.id,
        total_hours = %result.total_hours,
        "Schedule hours computed"
    );
    json_response(StatusCode::OK, result)
}

/// Handler for POST /tasks/evaluate.
///
/// Applies the status timestamp rules to the task and reports its derived
/// overdue flag and progress.
async fn task_evaluation_handler(
    payload: Result<Json<TaskEvaluationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing task evaluation request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let now = request.now.unwrap_or_else(Utc::now);
    let change = TaskStatusChange {
        from: request.previous_status,
        to: request.task.status,
    };
    let result = apply_status_change(&change, &request.task, now, 1);

    let mut task = request.task;
    result.update.apply_to(&mut task);

    let response = TaskEvaluationResponse {
        is_overdue: is_overdue(&task, now),
        progress_percentage: progress_percentage(&task),
        update: result.update,
        audit_step: result.audit_step,
        task,
    };
    info!(
        correlation_id = %correlation_id,
        task_id = %response.task.id,
        status = %response.task.status,
        is_overdue = response.is_overdue,
        "Task evaluated"
    );
    json_response(StatusCode::OK, response)
}

/// Handler for POST /time-logs/validate.
async fn time_log_validation_handler(
    payload: Result<Json<TimeLogValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time log validation request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let entry = request.entry;

    if let Err(err) = validate_time_log_entry(&entry) {
        return engine_error_response(correlation_id, err);
    }

    json_response(
        StatusCode::OK,
        TimeLogValidationResponse {
            valid: true,
            is_open: entry.is_open(),
            duration_hours: entry.duration_hours(),
            id: entry.id,
        },
    )
}

/// Handler for POST /performance/score.
///
/// Each observation is scored against its catalog metric. The overall score
/// weights the scored observations by metric weight.
async fn performance_score_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerformanceScoreRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance score request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let employee_id = request.employee_id.clone();

    let start_time = Instant::now();
    match score_all(state.config(), request) {
        Ok(scored) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                observations = scored.scores.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Performance scored"
            );
            json_response(StatusCode::OK, scored)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn score_all(
    config: &ConfigLoader,
    request: PerformanceScoreRequest,
) -> EngineResult<PerformanceScoreResponse> {
    let employee_id = request.employee_id.clone();
    let rules = config.config().scoring();

    let mut scores = Vec::new();
    let mut weighted = Vec::new();
    for (index, observation) in request.into_observations().iter().enumerate() {
        let metric = config.get_metric(&observation.metric_id)?;
        let result = score_observation(observation, metric, rules, index as u32 + 1)?;
        if let Some(score) = result.score {
            weighted.push((score, metric.weight));
        }
        scores.push(result);
    }

    Ok(PerformanceScoreResponse {
        employee_id,
        scores,
        overall_score: weighted_overall_score(&weighted),
    })
}

/// Handler for POST /daily-logs/evaluate.
async fn daily_log_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyLogRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily log request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rules = state.config().config().productivity();
    match evaluate_daily_log(&request.log, &rules, 1) {
        Ok(result) => {
            for warning in &result.audit_trace.warnings {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %result.employee_id,
                    code = %warning.code,
                    "{}",
                    warning.message
                );
            }
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                productivity_score = result.productivity_score,
                duration_us = result.audit_trace.duration_us,
                "Daily log evaluated"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /reports/productivity-summary.
async fn productivity_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductivitySummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing productivity summary request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rules = state.config().config().productivity();
    match summarize_productivity(&request.employee_id, &request.period, &request.logs, &rules) {
        Ok(summary) => json_response(StatusCode::OK, summary),
        Err(err) => engine_error_response(correlation_id, err),
    }
}
