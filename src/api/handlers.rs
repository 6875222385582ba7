//! HTTP request handlers for the compensation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{BatchRow, SnapshotFigures, aggregate_batch, build_report_snapshot};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::ReportSnapshot;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts a report request and returns the computed report snapshot.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

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

    // Reject negative income components and period figures before computing
    if let Err(err) = validate_request(&request) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let start_time = Instant::now();
    let snapshot = build_report(request, state.config());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        report_id = %snapshot.report_id,
        rows_count = snapshot.results.len(),
        revenue_total = %snapshot.totals.revenue_total,
        profit = %snapshot.profit,
        duration_us = duration.as_micros(),
        "Report computed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(snapshot),
    )
        .into_response()
}

/// Validates a report request.
///
/// Income components and period figures must be non-negative; the declared
/// balance is the one figure that may legitimately be negative.
fn validate_request(request: &ReportRequest) -> EngineResult<()> {
    for row in &request.rows {
        let components = [
            ("activity_income", row.activity_income),
            ("invoice_income", row.invoice_income),
            ("sales_income", row.sales_income),
        ];
        for (field, value) in components {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidEntry {
                    entry_id: row.id.clone(),
                    message: format!("{} {} is negative", field, value),
                });
            }
        }
    }

    let figures = [
        ("deductible_expenses", request.deductible_expenses),
        ("withdrawals", request.withdrawals),
        ("commissions", request.commissions),
        ("inter_invoices", request.inter_invoices),
    ];
    for (field, value) in figures {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidEntry {
                entry_id: field.to_string(),
                message: format!("figure {} is negative", value),
            });
        }
    }

    Ok(())
}

/// Computes the report snapshot for a validated request.
fn build_report(request: ReportRequest, config: &ConfigLoader) -> ReportSnapshot {
    let figures = SnapshotFigures {
        declared_balance: request.declared_balance,
        deductible_expenses: request.deductible_expenses,
        withdrawals: request.withdrawals,
        commissions: request.commissions,
        inter_invoices: request.inter_invoices,
    };
    let rows: Vec<BatchRow> = request.rows.into_iter().map(Into::into).collect();

    let batch = aggregate_batch(&rows, config.compensation());
    build_report_snapshot(batch, config.corporate_tax(), config.wealth_tax(), figures)
}
