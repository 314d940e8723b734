//! HTTP request handlers for the Talent Assessment Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::{get_potential, get_recommendations, get_trend};
use crate::error::EngineError;
use crate::ingest::search_roster;
use crate::models::EmployeeRecord;

use super::request::AssessRequest;
use super::response::{ApiError, ApiErrorResponse, AssessmentResponse, EmployeeSummary};

use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/assess", post(assess_handler))
        .route("/employees/search", get(search_handler))
        .route("/employees/:id/assessment", get(assessment_handler))
        .with_state(state)
}

/// Handler for POST /assess.
///
/// Accepts an inline record (roster labels) and returns its full
/// assessment: trend, potential and recommendations.
async fn assess_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssessRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assess request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
                        // Valid JSON but not a record-shaped field mapping
                        let invalid = EngineError::InvalidRecord { message: body_text };
                        ApiErrorResponse::from(invalid).error
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let record: EmployeeRecord = request.into();
    let start_time = Instant::now();
    let response = build_assessment(&record, &state);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = %response.employee_id,
        category = %response.potential.category,
        duration_us = duration.as_micros(),
        "Assessment completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /employees/search?q=.
///
/// Substring search over the loaded roster, capped at five matches.
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let matches: Vec<EmployeeSummary> = search_roster(state.roster(), query)
        .into_iter()
        .map(|record| EmployeeSummary {
            id: record.id.clone(),
            name: record.name.clone(),
            position: record.position.clone(),
        })
        .collect();

    (StatusCode::OK, Json(matches)).into_response()
}

/// Handler for GET /employees/{id}/assessment.
///
/// Returns the full assessment for a roster record, or 404 when the
/// personnel ID is not on the roster.
async fn assessment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.find_record(&id) {
        Some(record) => {
            let response = build_assessment(record, &state);
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                category = %response.potential.category,
                "Roster assessment completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        None => {
            warn!(correlation_id = %correlation_id, employee_id = %id, "Record not found");
            let api_error: ApiErrorResponse = EngineError::RecordNotFound { id }.into();
            api_error.into_response()
        }
    }
}

/// Runs the assessment pipeline for one record.
fn build_assessment(record: &EmployeeRecord, state: &AppState) -> AssessmentResponse {
    let config = state.config();
    AssessmentResponse {
        employee_id: record.id.clone(),
        name: record.name.clone(),
        trend: get_trend(Some(record)),
        potential: get_potential(Some(record), config),
        recommendations: get_recommendations(Some(record), config),
    }
}
