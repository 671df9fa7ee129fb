//! Full payroll calculation for one employee, and for batches.
//!
//! [`calculate_payroll`] validates the input, runs each statutory calculator
//! against the tax year configuration and assembles a [`PayrollResult`]:
//!
//! - net pay = gross - (income tax + employee NIC + student loan + employee pension)
//! - employer cost = gross + employer NIC + employer pension
//!
//! [`calculate_batch_payroll`] runs many independent calculations in
//! parallel with rayon. Each entry's outcome is exactly what
//! [`calculate_payroll`] returns for that input alone.

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxYearConfig;
use crate::error::EngineResult;
use crate::models::{PayrollBreakdown, PayrollInput, PayrollResult};

use super::{calculate_full_nic, calculate_income_tax, calculate_pension, calculate_student_loan};

/// Calculates a complete payroll for one employee and one period.
///
/// # Arguments
///
/// * `input` - The employee's pay and deduction parameters for the period
/// * `config` - The tax year configuration
///
/// # Returns
///
/// A [`PayrollResult`] with headline figures in the input's period unit, or
/// the first error encountered. Negative gross pay or allowance used is
/// rejected with `InvalidInput` before any calculation runs.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_payroll;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::{NicCategory, PayrollInput, PeriodType};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/2025-26").unwrap();
/// let input = PayrollInput {
///     gross_pay: Decimal::from(60000),
///     tax_code: "1257L".parse().unwrap(),
///     nic_category: NicCategory::A,
///     period: PeriodType::Annual,
///     student_loan: None,
///     pension: None,
///     employment_allowance_used: Decimal::ZERO,
/// };
///
/// let result = calculate_payroll(&input, loader.config()).unwrap();
/// assert_eq!(result.income_tax, Decimal::from(13946));
/// assert_eq!(result.net_pay, Decimal::new(4284340, 2));
/// ```
pub fn calculate_payroll(
    input: &PayrollInput,
    config: &TaxYearConfig,
) -> EngineResult<PayrollResult> {
    input.validate()?;

    let gross_pay = input.gross_pay;
    let period = input.period;

    let income_tax = calculate_income_tax(gross_pay, &input.tax_code, period, config.income_tax())?;
    let nic = calculate_full_nic(
        gross_pay,
        input.nic_category,
        period,
        input.employment_allowance_used,
        config.national_insurance(),
    )?;
    let student_loan = input
        .student_loan
        .map(|plan| calculate_student_loan(gross_pay, plan, period, config.student_loans()))
        .transpose()?;
    let pension = input
        .pension
        .as_ref()
        .map(|spec| calculate_pension(gross_pay, spec));

    let student_loan_deduction = student_loan
        .as_ref()
        .map_or(Decimal::ZERO, |s| s.deduction);
    let employee_pension = pension
        .as_ref()
        .map_or(Decimal::ZERO, |p| p.employee_contribution);
    let employer_pension = pension
        .as_ref()
        .map_or(Decimal::ZERO, |p| p.employer_contribution);

    let total_deductions = income_tax.tax_due
        + nic.employee.contribution
        + student_loan_deduction
        + employee_pension;
    let net_pay = gross_pay - total_deductions;
    let total_employer_cost = gross_pay + nic.employer.contribution + employer_pension;

    debug!(
        period = %period,
        tax_code = %input.tax_code,
        nic_category = %input.nic_category,
        %gross_pay,
        income_tax = %income_tax.tax_due,
        employee_nic = %nic.employee.contribution,
        employer_nic = %nic.employer.contribution,
        %net_pay,
        "Calculated payroll"
    );

    Ok(PayrollResult {
        period,
        gross_pay,
        taxable_income: income_tax.taxable_income,
        income_tax: income_tax.tax_due,
        employee_nic: nic.employee.contribution,
        employer_nic: nic.employer.contribution,
        employment_allowance_claimed: nic.employer.allowance_claimed,
        student_loan: student_loan_deduction,
        employee_pension,
        employer_pension,
        total_deductions,
        net_pay,
        total_employer_cost,
        breakdown: PayrollBreakdown {
            personal_allowance: income_tax.personal_allowance,
            tax_bands: income_tax.bands,
            national_insurance: nic.breakdown(),
            student_loan,
            pension,
        },
    })
}

/// Calculates payroll for many employees in parallel.
///
/// The output has one entry per input, in input order. A failing input
/// produces an `Err` in its own slot and does not affect the others.
pub fn calculate_batch_payroll(
    inputs: &[PayrollInput],
    config: &TaxYearConfig,
) -> Vec<EngineResult<PayrollResult>> {
    inputs
        .par_iter()
        .map(|input| calculate_payroll(input, config))
        .collect()
}
