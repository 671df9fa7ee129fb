//! HTTP request handlers for the PAYE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_batch_payroll, calculate_payroll, generate_payslip, validate_tax_code,
};
use crate::error::{EngineError, EngineResult};
use crate::models::PayrollInput;

use super::request::{BatchRequest, PayrollRequest, PayslipRequest, TaxCodeValidationRequest};
use super::response::{
    ApiError, ApiErrorResponse, BatchEntry, BatchResponse, TaxCodeValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(batch_handler))
        .route("/payslip", post(payslip_handler))
        .route("/tax-code/validate", post(validate_tax_code_handler))
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

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
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

/// Handler for POST /calculate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let outcome = PayrollInput::try_from(request)
        .and_then(|input| calculate_payroll(&input, state.config().config()));

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                period = %result.period,
                gross_pay = %result.gross_pay,
                net_pay = %result.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculated"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /calculate/batch.
///
/// Always answers 200 once the body parses; per-entry failures are reported
/// in their own slot.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let converted: Vec<EngineResult<PayrollInput>> = request
        .entries
        .into_iter()
        .map(PayrollInput::try_from)
        .collect();
    let valid: Vec<PayrollInput> = converted
        .iter()
        .filter_map(|entry| entry.as_ref().ok().cloned())
        .collect();

    let mut calculated = calculate_batch_payroll(&valid, state.config().config()).into_iter();
    let entries: Vec<BatchEntry> = converted
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(_) => calculated.next(),
            Err(err) => Some(Err(err)),
        })
        .map(BatchEntry::from)
        .collect();

    let failed = entries
        .iter()
        .filter(|entry| matches!(entry, BatchEntry::Error(_)))
        .count();
    info!(
        correlation_id = %correlation_id,
        entries = entries.len(),
        failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch calculated"
    );

    json_response(StatusCode::OK, BatchResponse { entries })
}

/// Handler for POST /payslip.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = match PayrollInput::try_from(request.payroll) {
        Ok(input) => input,
        Err(err) => return error_response(correlation_id, err),
    };

    match calculate_payroll(&input, state.config().config()) {
        Ok(result) => {
            let payslip = generate_payslip(&result, &input, &request.employee);
            info!(
                correlation_id = %correlation_id,
                employee_id = %payslip.employee_id,
                payslip_id = %payslip.payslip_id,
                net_pay = %payslip.net_pay,
                "Payslip generated"
            );
            json_response(StatusCode::OK, payslip)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /tax-code/validate.
async fn validate_tax_code_handler(
    payload: Result<Json<TaxCodeValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match validate_tax_code(&request.tax_code) {
        Ok(code) => json_response(
            StatusCode::OK,
            TaxCodeValidationResponse {
                tax_code: code.to_string(),
                personal_allowance: code.personal_allowance(),
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}
