//! HTTP request handlers for the Time Tracking Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::format_hours;
use crate::error::EngineError;

use super::request::{
    ClockEventRequest, CloseSegmentRequest, CrewChangeRequest, DayQuery, PayrollQuery,
    StartSegmentRequest, WeekQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/clock-in", post(clock_in_handler))
        .route("/clock-out", post(clock_out_handler))
        .route("/workers/:worker_id/status", get(status_handler))
        .route("/workers/:worker_id/blocks", get(blocks_handler))
        .route("/workers/:worker_id/hours", get(day_hours_handler))
        .route("/workers/:worker_id/reports/weekly", get(weekly_report_handler))
        .route("/workers/:worker_id/payroll", get(payroll_handler))
        .route("/segments", post(start_segment_handler))
        .route("/segments/:segment_id/close", post(close_segment_handler))
        .route("/segments/:segment_id/crew", post(crew_change_handler))
        .route("/work-orders/:work_order_id/hours", get(work_order_hours_handler))
        .with_state(state)
}

/// Clock-state response for one worker.
#[derive(Debug, Serialize)]
struct StatusResponse {
    worker_id: String,
    is_clocked_in: bool,
}

/// Day total response, with the H:MM presentation of the decimal total.
#[derive(Debug, Serialize)]
struct DayHoursResponse {
    worker_id: String,
    date: NaiveDate,
    total_hours: Decimal,
    formatted: String,
}

/// Accounted labor-hours for one work order.
#[derive(Debug, Serialize)]
struct WorkOrderHoursResponse {
    work_order_id: String,
    total_hours: Decimal,
    formatted: String,
}

fn reject_body(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "request body rejected"
    );
    let error = if body_text.contains("missing field") {
        ApiError::new("VALIDATION_ERROR", body_text)
    } else {
        ApiError::malformed_json(body_text)
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn engine_failure(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "operation failed");
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /clock-in.
async fn clock_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockEventRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_body(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        worker_id = %request.worker_id,
        "processing clock-in"
    );
    match state.clock().clock_in(&request.worker_id, request.timestamp) {
        Ok(block) => (StatusCode::OK, Json(block)).into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for POST /clock-out.
async fn clock_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockEventRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_body(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        worker_id = %request.worker_id,
        "processing clock-out"
    );
    match state.clock().clock_out(&request.worker_id, request.timestamp) {
        Ok(block) => (StatusCode::OK, Json(block)).into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for GET /workers/{worker_id}/status.
async fn status_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.clock().is_clocked_in(&worker_id) {
        Ok(is_clocked_in) => (
            StatusCode::OK,
            Json(StatusResponse {
                worker_id,
                is_clocked_in,
            }),
        )
            .into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for GET /workers/{worker_id}/blocks?date=YYYY-MM-DD.
async fn blocks_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    Query(query): Query<DayQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.clock().time_blocks(&worker_id, query.date) {
        Ok(blocks) => (StatusCode::OK, Json(blocks)).into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for GET /workers/{worker_id}/hours?date=YYYY-MM-DD.
async fn day_hours_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    Query(query): Query<DayQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.clock().total_hours(&worker_id, query.date) {
        Ok(total_hours) => (
            StatusCode::OK,
            Json(DayHoursResponse {
                worker_id,
                date: query.date,
                total_hours,
                formatted: format_hours(total_hours),
            }),
        )
            .into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for GET /workers/{worker_id}/reports/weekly?week_start=YYYY-MM-DD.
async fn weekly_report_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    Query(query): Query<WeekQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state
        .reports()
        .generate_weekly_report(&worker_id, query.week_start)
    {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %report.worker_id,
                week_start = %report.week_start,
                weekly_total = %report.weekly_total,
                "weekly report generated"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for GET /workers/{worker_id}/payroll.
async fn payroll_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    Query(query): Query<PayrollQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.reports().calculate_payroll(
        &worker_id,
        query.period_start,
        query.period_end,
        query.hourly_rate,
    ) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %record.worker_id,
                total_hours = %record.total_hours,
                "payroll record computed"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for POST /segments.
async fn start_segment_handler(
    State(state): State<AppState>,
    payload: Result<Json<StartSegmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_body(rejection, correlation_id),
    };

    match state.segments().start_segment(
        &request.work_order_id,
        request.start_time,
        request.team_size,
        request.team_members,
    ) {
        Ok(segment) => (StatusCode::CREATED, Json(segment)).into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for POST /segments/{segment_id}/close.
async fn close_segment_handler(
    State(state): State<AppState>,
    Path(segment_id): Path<Uuid>,
    payload: Result<Json<CloseSegmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_body(rejection, correlation_id),
    };

    match state.segments().close_segment(segment_id, request.end_time) {
        Ok(segment) => (StatusCode::OK, Json(segment)).into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for POST /segments/{segment_id}/crew.
async fn crew_change_handler(
    State(state): State<AppState>,
    Path(segment_id): Path<Uuid>,
    payload: Result<Json<CrewChangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_body(rejection, correlation_id),
    };

    match state.segments().change_crew(
        segment_id,
        request.at,
        request.team_size,
        request.team_members,
    ) {
        Ok(segment) => (StatusCode::CREATED, Json(segment)).into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}

/// Handler for GET /work-orders/{work_order_id}/hours.
async fn work_order_hours_handler(
    State(state): State<AppState>,
    Path(work_order_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.segments().work_order_hours(&work_order_id) {
        Ok(total_hours) => (
            StatusCode::OK,
            Json(WorkOrderHoursResponse {
                work_order_id,
                total_hours,
                formatted: format_hours(total_hours),
            }),
        )
            .into_response(),
        Err(err) => engine_failure(err, correlation_id),
    }
}
