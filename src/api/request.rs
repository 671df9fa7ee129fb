//! Request types for the PAYE engine API.
//!
//! Request bodies carry tax codes, NIC categories and student loan plans as
//! plain strings so that an unrecognised value reaches the engine's own
//! parsers and is reported with the engine's error code, rather than as a
//! generic JSON error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    EmployeeDetails, NicCategory, PayrollInput, PensionSpec, PeriodType, StudentLoanPlan, TaxCode,
};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Tax code, e.g. "1257L".
    pub tax_code: String,
    /// NIC category letter.
    pub nic_category: String,
    /// Pay period cadence.
    pub period: PeriodType,
    /// Student loan plan key, e.g. "plan2".
    #[serde(default)]
    pub student_loan: Option<String>,
    /// Workplace pension contribution parameters.
    #[serde(default)]
    pub pension: Option<PensionSpec>,
    /// Employment Allowance already claimed this tax year.
    #[serde(default)]
    pub employment_allowance_used: Decimal,
}

impl TryFrom<PayrollRequest> for PayrollInput {
    type Error = EngineError;

    fn try_from(req: PayrollRequest) -> Result<Self, Self::Error> {
        Ok(PayrollInput {
            gross_pay: req.gross_pay,
            tax_code: req.tax_code.parse::<TaxCode>()?,
            nic_category: req.nic_category.parse::<NicCategory>()?,
            period: req.period,
            student_loan: req
                .student_loan
                .map(|plan| plan.parse::<StudentLoanPlan>())
                .transpose()?,
            pension: req.pension,
            employment_allowance_used: req.employment_allowance_used,
        })
    }
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// One payroll request per employee.
    pub entries: Vec<PayrollRequest>,
}

/// Request body for the `/payslip` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Who the payslip is for.
    pub employee: EmployeeDetails,
    /// The pay to calculate.
    pub payroll: PayrollRequest,
}

/// Request body for the `/tax-code/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCodeValidationRequest {
    /// The tax code to check.
    pub tax_code: String,
}
