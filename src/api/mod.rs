//! HTTP API module for the PAYE engine.
//!
//! This module exposes payroll calculation, batch calculation, payslip
//! generation and tax code validation as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, PayrollRequest, PayslipRequest, TaxCodeValidationRequest};
pub use response::{ApiError, BatchEntry, BatchResponse, TaxCodeValidationResponse};
pub use state::AppState;
