//! HTTP request handlers for the Loan Amortization Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_schedule, merge_schedules};
use crate::error::{EngineError, EngineResult};
use crate::models::{LoanParameters, Schedule};

use super::request::{ComparisonRequest, LoanRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compare", post(compare_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for POST /compare endpoint.
///
/// Accepts two loan parameter snapshots, simulates each schedule and
/// returns the merged comparison series as a JSON array.
async fn compare_handler(
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();

    let schedule1 = match simulate_loan("loan1", request.loan1) {
        Ok(schedule) => schedule,
        Err(response) => {
            warn!(
                correlation_id = %correlation_id,
                error = %response.error.message,
                "Simulation of loan1 failed"
            );
            return response.into_response();
        }
    };
    let schedule2 = match simulate_loan("loan2", request.loan2) {
        Ok(schedule) => schedule,
        Err(response) => {
            warn!(
                correlation_id = %correlation_id,
                error = %response.error.message,
                "Simulation of loan2 failed"
            );
            return response.into_response();
        }
    };

    let rows = merge_schedules(&schedule1, &schedule2);
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        periods1 = schedule1.len(),
        periods2 = schedule2.len(),
        rows = rows.len(),
        duration_us = duration.as_micros(),
        "Comparison completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(rows),
    )
        .into_response()
}

/// Handler for GET /defaults endpoint.
///
/// Returns the configured default loan parameters with the start date
/// filled with the current date, ready to seed the comparison form.
async fn defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    let defaults = state.config().defaults();
    let response = LoanRequest {
        loan_amount: defaults.loan_amount,
        interest_rate: defaults.interest_rate,
        offset: defaults.offset,
        repayment: defaults.repayment,
        extra_repayment: defaults.extra_repayment,
        frequency: defaults.frequency.as_str().to_string(),
        extra_frequency: defaults.extra_frequency.as_str().to_string(),
        term_years: defaults.term_years,
        start_date: Utc::now().date_naive(),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Converts and simulates one loan, labeling any failure with the loan
/// it belongs to.
fn simulate_loan(label: &str, request: LoanRequest) -> Result<Schedule, ApiErrorResponse> {
    let result: EngineResult<Schedule> = request
        .try_into()
        .and_then(|params: LoanParameters| calculate_schedule(&params));
    result.map_err(|error| labeled_error(label, error))
}

fn labeled_error(label: &str, error: EngineError) -> ApiErrorResponse {
    let mut response: ApiErrorResponse = error.into();
    response.error.details = Some(match response.error.details.take() {
        Some(details) => format!("{details} (in {label})"),
        None => format!("in {label}"),
    });
    response
}
