//! Display-oriented payslip structure.
//!
//! A [`Payslip`] is built from a [`super::PayrollResult`] by
//! [`crate::calculation::generate_payslip`]. All amounts on a payslip are
//! rounded to pennies and its totals are derived from the rounded lines.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{NicCategory, PeriodType, TaxCode};

/// A single labelled amount on a payslip.
///
/// # Example
///
/// ```
/// use paye_engine::models::PayslipLine;
/// use rust_decimal::Decimal;
///
/// let line = PayslipLine {
///     code: "income_tax".to_string(),
///     description: "Income Tax (PAYE)".to_string(),
///     amount: Decimal::new(36292, 2),
/// };
/// assert_eq!(line.amount.to_string(), "362.92");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// Stable machine-readable identifier for the line.
    pub code: String,
    /// Human-readable label.
    pub description: String,
    /// Amount in pounds, rounded to pennies.
    pub amount: Decimal,
}

/// Year-to-date totals.
///
/// The engine keeps no history, so every field is zero. A payroll-run ledger
/// outside the engine is responsible for filling these in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearToDate {
    /// Gross pay to date.
    pub gross_pay: Decimal,
    /// Taxable pay to date.
    pub taxable_pay: Decimal,
    /// Income tax to date.
    pub income_tax: Decimal,
    /// Employee National Insurance to date.
    pub employee_nic: Decimal,
    /// Employer National Insurance to date.
    pub employer_nic: Decimal,
    /// Student loan deductions to date.
    pub student_loan: Decimal,
    /// Employee pension contributions to date.
    pub employee_pension: Decimal,
    /// Net pay to date.
    pub net_pay: Decimal,
}

/// A payslip for one employee and one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// When the payslip was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the figures.
    pub engine_version: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name.
    pub employee_name: String,
    /// Employee National Insurance number, if known.
    pub ni_number: Option<String>,
    /// Tax code used.
    pub tax_code: TaxCode,
    /// NIC category used.
    pub nic_category: NicCategory,
    /// Pay period cadence.
    pub period: PeriodType,
    /// Date of payment.
    pub pay_date: NaiveDate,
    /// Payments making up gross pay.
    pub payments: Vec<PayslipLine>,
    /// Deductions from gross pay.
    pub deductions: Vec<PayslipLine>,
    /// Contributions paid by the employer on top of gross pay.
    pub employer_contributions: Vec<PayslipLine>,
    /// Gross pay (sum of `payments`).
    pub gross_pay: Decimal,
    /// Total deductions (sum of `deductions`).
    pub total_deductions: Decimal,
    /// Net pay (`gross_pay - total_deductions`).
    pub net_pay: Decimal,
    /// Year-to-date totals, always zero.
    pub year_to_date: YearToDate,
}
