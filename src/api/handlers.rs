//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{build_report, compute_lines, summarize};
use crate::models::PayrollLine;

use super::request::{CalculationRequest, ReportRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, HealthResponse, ReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn warning_count(lines: &[PayrollLine]) -> usize {
    lines.iter().map(|line| line.warnings.len()).sum()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
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
    ApiErrorResponse::bad_request(error)
}

/// Handler for POST /calculate endpoint.
///
/// Prices every submitted entry and returns the lines with their totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(rejection_error(correlation_id, rejection)),
    };

    let config = state.config();
    let options = match request.options(config) {
        Ok(options) => options,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid calculation options");
            return error_response(err.into());
        }
    };
    let rates = request.rate_card(config);
    debug!(
        correlation_id = %correlation_id,
        threshold = %options.daily_threshold,
        policy = ?options.overtime_policy,
        rate_count = rates.len(),
        "Resolved calculation inputs"
    );

    let start_time = Instant::now();
    let lines = compute_lines(&request.entries, &rates, &options);
    let totals = summarize(&lines);
    let duration_us = start_time.elapsed().as_micros() as u64;
    let warning_count = warning_count(&lines);

    info!(
        correlation_id = %correlation_id,
        line_count = lines.len(),
        warning_count,
        total_pay = %totals.total_pay,
        duration_us,
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: engine_version(),
            lines,
            totals,
            warning_count,
            duration_us,
        },
    )
}

/// Handler for POST /report endpoint.
///
/// Computes lines for the submitted entries and folds them into rows for the
/// requested period.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return error_response(rejection_error(correlation_id, rejection)),
    };

    let config = state.config();
    let options = match request.calculation.options(config) {
        Ok(options) => options,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid report options");
            return error_response(err.into());
        }
    };
    let rates = request.calculation.rate_card(config);
    let week_start = request.week_start(config);

    let start_time = Instant::now();
    let lines = compute_lines(&request.calculation.entries, &rates, &options);
    let report = build_report(&lines, request.period, week_start);
    let duration_us = start_time.elapsed().as_micros() as u64;
    let warning_count = warning_count(&lines);

    info!(
        correlation_id = %correlation_id,
        period = ?report.period,
        line_count = lines.len(),
        row_count = report.rows.len(),
        warning_count,
        duration_us,
        "Report completed successfully"
    );

    json_response(
        StatusCode::OK,
        ReportResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: engine_version(),
            period: report.period,
            rows: report.rows,
            totals: report.totals,
            warning_count,
            duration_us,
        },
    )
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            engine_version: engine_version(),
        },
    )
}
