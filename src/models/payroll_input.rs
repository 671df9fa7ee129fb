//! The input record for a single payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{NicCategory, PensionSpec, PeriodType, StudentLoanPlan, TaxCode};

/// The largest amount any money field may carry: 1,000,000,000,000.
///
/// Annualising and rating anything up to this stays well inside `Decimal`'s
/// range, so the calculators never overflow on validated input.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Rejects a money field that is negative or above [`MAX_AMOUNT`].
pub(crate) fn check_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    let message = if amount < Decimal::ZERO {
        format!("must not be negative, got {}", amount)
    } else if amount > MAX_AMOUNT {
        format!("must not exceed {}, got {}", MAX_AMOUNT, amount)
    } else {
        return Ok(());
    };

    Err(EngineError::InvalidInput {
        field: field.to_string(),
        message,
    })
}

/// Everything the engine needs to compute one employee's pay for one period.
///
/// The engine never mutates an input. `employment_allowance_used` is the
/// employer's running total for the tax year, tracked by the caller.
///
/// # Example
///
/// ```
/// use paye_engine::models::{NicCategory, PayrollInput, PeriodType};
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     gross_pay: Decimal::from(3000),
///     tax_code: "1257L".parse().unwrap(),
///     nic_category: NicCategory::A,
///     period: PeriodType::Monthly,
///     student_loan: None,
///     pension: None,
///     employment_allowance_used: Decimal::ZERO,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// The employee's tax code.
    pub tax_code: TaxCode,
    /// The employee's National Insurance category.
    pub nic_category: NicCategory,
    /// The cadence `gross_pay` is expressed in.
    pub period: PeriodType,
    /// Student loan plan, if the employee repays one.
    #[serde(default)]
    pub student_loan: Option<StudentLoanPlan>,
    /// Workplace pension parameters, if enrolled.
    #[serde(default)]
    pub pension: Option<PensionSpec>,
    /// Employment allowance already claimed this tax year.
    #[serde(default)]
    pub employment_allowance_used: Decimal,
}

impl PayrollInput {
    /// Checks the numeric fields that the type system cannot constrain.
    ///
    /// Tax code, NIC category and period are validated when they are parsed.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("gross_pay", self.gross_pay)?;
        check_amount("employment_allowance_used", self.employment_allowance_used)?;

        if let Some(pension) = &self.pension {
            pension.validate()?;
        }

        Ok(())
    }
}
