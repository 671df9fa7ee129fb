//! Response types for the PAYE engine API.
//!
//! This module defines the error response structures, the batch response
//! envelope and the error mapping for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollResult;

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidTaxCode { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TAX_CODE",
                    message,
                    "Accepted forms are <digits>L, <digits>M, <digits>N, K<digits>, BR, D0, D1 and NT",
                ),
            },
            EngineError::InvalidNicCategory { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_NIC_CATEGORY",
                    message,
                    "Accepted categories are A, B, C, H, J, L, S, X and Z",
                ),
            },
            EngineError::InvalidStudentLoanPlan { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_STUDENT_LOAN_PLAN",
                    message,
                    "Accepted plans are plan1, plan2, plan4 and postgrad",
                ),
            },
            EngineError::InvalidInput { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_INPUT", message),
            },
        }
    }
}

/// Outcome of one entry in a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchEntry {
    /// The entry was calculated.
    Result(PayrollResult),
    /// The entry failed; other entries are unaffected.
    Error(ApiError),
}

impl From<EngineResult<PayrollResult>> for BatchEntry {
    fn from(outcome: EngineResult<PayrollResult>) -> Self {
        match outcome {
            Ok(result) => BatchEntry::Result(result),
            Err(err) => BatchEntry::Error(ApiErrorResponse::from(err).error),
        }
    }
}

/// Response body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// One entry per request entry, in request order.
    pub entries: Vec<BatchEntry>,
}

/// Response body for the `/tax-code/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCodeValidationResponse {
    /// Canonical form of the code.
    pub tax_code: String,
    /// Annual personal allowance, absent for `NT`.
    pub personal_allowance: Option<Decimal>,
}
