//! Student loan repayment deductions.

use rust_decimal::Decimal;

use crate::config::StudentLoansConfig;
use crate::error::EngineResult;
use crate::models::{PeriodType, StudentLoanDeduction, StudentLoanPlan};

use super::{convert_from_annual, convert_to_annual};

/// Calculates the student loan deduction for a period's gross pay.
///
/// The plan's rate is charged on annualised earnings above the plan's
/// annual threshold, and the result is converted back to the period.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for the period
/// * `plan` - The repayment plan
/// * `period` - The cadence of `gross_pay`
/// * `config` - The tax year's student loan plans
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_student_loan;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::{PeriodType, StudentLoanPlan};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/2025-26").unwrap();
/// let result = calculate_student_loan(
///     Decimal::from(40000),
///     StudentLoanPlan::Plan2,
///     PeriodType::Annual,
///     loader.config().student_loans(),
/// )
/// .unwrap();
///
/// // (40,000 - 28,470) * 9%
/// assert_eq!(result.deduction, Decimal::new(103770, 2));
/// ```
pub fn calculate_student_loan(
    gross_pay: Decimal,
    plan: StudentLoanPlan,
    period: PeriodType,
    config: &StudentLoansConfig,
) -> EngineResult<StudentLoanDeduction> {
    let rates = config.plan(plan)?;
    let annual_earnings = convert_to_annual(gross_pay, period);
    let liable = (annual_earnings - rates.threshold).max(Decimal::ZERO);

    Ok(StudentLoanDeduction {
        plan,
        annual_threshold: rates.threshold,
        rate: rates.rate,
        deduction: convert_from_annual(liable * rates.rate, period),
    })
}
