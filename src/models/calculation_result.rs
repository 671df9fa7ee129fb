//! Calculation result models for the PAYE engine.
//!
//! This module contains the [`PayrollResult`] type and the breakdown
//! structures that record which bands and thresholds contributed to each
//! deduction, for payslip itemisation and audit.
//!
//! Headline figures are in the period unit of the input. Breakdown lines for
//! income tax and National Insurance are in annual units, because that is the
//! unit the statutory tables are defined in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NicCategory, PeriodType, StudentLoanPlan};

/// The tax charged within one income tax band, in annual units.
///
/// Bands that absorbed no income are never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBandBreakdown {
    /// The band name from the tax-year configuration (e.g. "basic").
    pub band: String,
    /// The marginal rate of the band.
    pub rate: Decimal,
    /// Annual taxable income that fell within the band.
    pub taxable_amount: Decimal,
    /// Annual tax charged in the band.
    pub tax: Decimal,
}

/// Employee National Insurance split across the two statutory bands, in
/// annual units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicBreakdown {
    /// The category whose rates were applied.
    pub category: NicCategory,
    /// Annual earnings between the primary threshold and the upper limit.
    pub lower_band_earnings: Decimal,
    /// Rate applied to the lower band.
    pub lower_band_rate: Decimal,
    /// Annual contribution from the lower band.
    pub lower_band_contribution: Decimal,
    /// Annual earnings above the upper earnings limit.
    pub upper_band_earnings: Decimal,
    /// Rate applied above the upper earnings limit.
    pub upper_band_rate: Decimal,
    /// Annual contribution from the upper band.
    pub upper_band_contribution: Decimal,
    /// Annual employer contribution before the employment allowance.
    pub employer_contribution_before_allowance: Decimal,
}

/// A student loan deduction and the plan parameters behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentLoanDeduction {
    /// The repayment plan.
    pub plan: StudentLoanPlan,
    /// The plan's annual earnings threshold.
    pub annual_threshold: Decimal,
    /// The plan's deduction rate.
    pub rate: Decimal,
    /// The deduction for the period.
    pub deduction: Decimal,
}

/// Pension contributions for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionContribution {
    /// The earnings the percentages were applied to.
    pub pensionable_earnings: Decimal,
    /// Employee percentage.
    pub employee_rate: Decimal,
    /// Employer percentage.
    pub employer_rate: Decimal,
    /// Employee contribution, deducted from pay.
    pub employee_contribution: Decimal,
    /// Employer contribution, added to employer cost.
    pub employer_contribution: Decimal,
}

/// Itemised detail behind a [`PayrollResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Annual personal allowance resolved from the tax code, `None` for `NT`.
    pub personal_allowance: Option<Decimal>,
    /// Income tax per band, in ascending band order.
    pub tax_bands: Vec<TaxBandBreakdown>,
    /// National Insurance bands.
    pub national_insurance: NicBreakdown,
    /// Student loan detail, if a plan applied.
    pub student_loan: Option<StudentLoanDeduction>,
    /// Pension detail, if a pension applied.
    pub pension: Option<PensionContribution>,
}

/// The complete result of one payroll calculation.
///
/// Results are deterministic: the same input and configuration always yield
/// an equal result.
///
/// Invariants:
/// - `total_deductions = income_tax + employee_nic + student_loan + employee_pension`
/// - `net_pay = gross_pay - total_deductions`
/// - `total_employer_cost = gross_pay + employer_nic + employer_pension`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The cadence of every headline figure.
    pub period: PeriodType,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Taxable income for the period.
    pub taxable_income: Decimal,
    /// Income tax due for the period.
    pub income_tax: Decimal,
    /// Employee National Insurance for the period.
    pub employee_nic: Decimal,
    /// Employer National Insurance for the period, after the allowance.
    pub employer_nic: Decimal,
    /// Employment Allowance consumed by this period, the period share of the annual offset.
    pub employment_allowance_claimed: Decimal,
    /// Student loan deduction for the period.
    pub student_loan: Decimal,
    /// Employee pension contribution for the period.
    pub employee_pension: Decimal,
    /// Employer pension contribution for the period.
    pub employer_pension: Decimal,
    /// Sum of all employee deductions.
    pub total_deductions: Decimal,
    /// Pay after deductions.
    pub net_pay: Decimal,
    /// Gross pay plus employer NIC and employer pension.
    pub total_employer_cost: Decimal,
    /// Itemised detail.
    pub breakdown: PayrollBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tax_band_breakdown_serialization() {
        let line = TaxBandBreakdown {
            band: "basic".to_string(),
            rate: dec("0.20"),
            taxable_amount: dec("25130"),
            tax: dec("5026.00"),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["band"], "basic");
        assert_eq!(json["rate"], "0.20");
        assert_eq!(json["tax"], "5026.00");

        let back: TaxBandBreakdown = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_nic_breakdown_serializes_category_letter() {
        let breakdown = NicBreakdown {
            category: NicCategory::A,
            lower_band_earnings: dec("37700"),
            lower_band_rate: dec("0.08"),
            lower_band_contribution: dec("3016.00"),
            upper_band_earnings: dec("9730"),
            upper_band_rate: dec("0.02"),
            upper_band_contribution: dec("194.60"),
            employer_contribution_before_allowance: dec("8250.00"),
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["category"], "A");
        assert_eq!(json["upper_band_contribution"], "194.60");
    }
}
