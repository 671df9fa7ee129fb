//! Class 1 National Insurance contributions.
//!
//! Employee contributions are charged on annualised earnings between the
//! primary threshold and the upper earnings limit at the category's main
//! rate, and above the upper earnings limit at the category's upper rate.
//!
//! Employer contributions are charged on annualised earnings above the
//! secondary threshold. Whatever remains of the Employment Allowance after
//! `allowance_used` is offset against that annual liability, floored at zero,
//! and only then converted to the period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{EmployerNicConfig, NationalInsuranceConfig};
use crate::error::EngineResult;
use crate::models::{NicBreakdown, NicCategory, PeriodType};

use super::{convert_from_annual, convert_to_annual};

/// Employee National Insurance for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeNicResult {
    /// The category the rates were taken from.
    pub category: NicCategory,
    /// Gross pay annualised.
    pub annual_earnings: Decimal,
    /// Annual earnings between the primary threshold and the upper limit.
    pub lower_band_earnings: Decimal,
    /// Rate applied to `lower_band_earnings`.
    pub lower_band_rate: Decimal,
    /// Annual contribution on `lower_band_earnings`.
    pub lower_band_contribution: Decimal,
    /// Annual earnings above the upper limit.
    pub upper_band_earnings: Decimal,
    /// Rate applied to `upper_band_earnings`.
    pub upper_band_rate: Decimal,
    /// Annual contribution on `upper_band_earnings`.
    pub upper_band_contribution: Decimal,
    /// Total annual contribution.
    pub annual_contribution: Decimal,
    /// Contribution for the period.
    pub contribution: Decimal,
}

/// Employer National Insurance for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerNicResult {
    /// Gross pay annualised.
    pub annual_earnings: Decimal,
    /// Annual liability before the Employment Allowance.
    pub annual_contribution_before_allowance: Decimal,
    /// Period liability before the Employment Allowance.
    pub contribution_before_allowance: Decimal,
    /// Allowance left at the start of this period.
    pub allowance_remaining: Decimal,
    /// Allowance offset against the annual liability.
    pub annual_allowance_claimed: Decimal,
    /// The period's share of `annual_allowance_claimed`.
    pub allowance_claimed: Decimal,
    /// Annual liability after the Employment Allowance.
    pub annual_contribution: Decimal,
    /// Contribution payable for the period.
    pub contribution: Decimal,
}

/// Employee and employer National Insurance together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicResult {
    /// Employee side.
    pub employee: EmployeeNicResult,
    /// Employer side.
    pub employer: EmployerNicResult,
}

impl NicResult {
    /// Builds the audit breakdown carried on a payroll result.
    pub fn breakdown(&self) -> NicBreakdown {
        NicBreakdown {
            category: self.employee.category,
            lower_band_earnings: self.employee.lower_band_earnings,
            lower_band_rate: self.employee.lower_band_rate,
            lower_band_contribution: self.employee.lower_band_contribution,
            upper_band_earnings: self.employee.upper_band_earnings,
            upper_band_rate: self.employee.upper_band_rate,
            upper_band_contribution: self.employee.upper_band_contribution,
            employer_contribution_before_allowance: self
                .employer
                .annual_contribution_before_allowance,
        }
    }
}

/// Calculates employee National Insurance for a period's gross pay.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for the period
/// * `category` - The employee's NIC category
/// * `period` - The cadence of `gross_pay`
/// * `config` - The tax year's National Insurance tables
///
/// # Returns
///
/// An [`EmployeeNicResult`], or `InvalidNicCategory` when the configuration
/// has no rate row for `category`.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_employee_nic;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::{NicCategory, PeriodType};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/2025-26").unwrap();
/// let result = calculate_employee_nic(
///     Decimal::from(60000),
///     NicCategory::A,
///     PeriodType::Annual,
///     loader.config().national_insurance(),
/// )
/// .unwrap();
///
/// assert_eq!(result.contribution, Decimal::new(321060, 2));
/// ```
pub fn calculate_employee_nic(
    gross_pay: Decimal,
    category: NicCategory,
    period: PeriodType,
    config: &NationalInsuranceConfig,
) -> EngineResult<EmployeeNicResult> {
    let rates = config.employee_rates(category)?;
    let annual_earnings = convert_to_annual(gross_pay, period);

    let (lower_band_earnings, upper_band_earnings) = if annual_earnings <= rates.primary_threshold
    {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let lower = (annual_earnings - rates.primary_threshold)
            .min(rates.upper_threshold - rates.primary_threshold);
        let upper = (annual_earnings - rates.upper_threshold).max(Decimal::ZERO);
        (lower, upper)
    };

    let lower_band_contribution = lower_band_earnings * rates.primary_rate;
    let upper_band_contribution = upper_band_earnings * rates.upper_rate;
    let annual_contribution = lower_band_contribution + upper_band_contribution;

    Ok(EmployeeNicResult {
        category,
        annual_earnings,
        lower_band_earnings,
        lower_band_rate: rates.primary_rate,
        lower_band_contribution,
        upper_band_earnings,
        upper_band_rate: rates.upper_rate,
        upper_band_contribution,
        annual_contribution,
        contribution: convert_from_annual(annual_contribution, period),
    })
}

/// Calculates employer National Insurance for a period's gross pay.
///
/// `allowance_used` is the Employment Allowance already claimed earlier in
/// the tax year. The remaining allowance is offset against the annual
/// liability, which never goes below zero, and the result is converted to
/// the period. `allowance_claimed` is the period's share of the offset, so a
/// caller adding it to its running total stays in step with `contribution`.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_employer_nic;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::PeriodType;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/2025-26").unwrap();
/// let employer = &loader.config().national_insurance().employer;
///
/// // 8,250 liability fully covered by a fresh 10,500 allowance
/// let fresh = calculate_employer_nic(Decimal::from(60000), PeriodType::Annual, Decimal::ZERO, employer);
/// assert_eq!(fresh.contribution, Decimal::ZERO);
///
/// let exhausted = calculate_employer_nic(
///     Decimal::from(60000),
///     PeriodType::Annual,
///     Decimal::from(10500),
///     employer,
/// );
/// assert_eq!(exhausted.contribution, Decimal::from(8250));
///
/// // 5,500 left against 8,250 leaves 2,750 a year, spread over 12 months
/// let monthly = calculate_employer_nic(Decimal::from(5000), PeriodType::Monthly, Decimal::from(5000), employer);
/// assert_eq!(monthly.contribution, Decimal::from(2750) / Decimal::from(12));
/// ```
pub fn calculate_employer_nic(
    gross_pay: Decimal,
    period: PeriodType,
    allowance_used: Decimal,
    config: &EmployerNicConfig,
) -> EmployerNicResult {
    let annual_earnings = convert_to_annual(gross_pay, period);
    let annual_contribution_before_allowance =
        ((annual_earnings - config.secondary_threshold) * config.secondary_rate)
            .max(Decimal::ZERO);
    let contribution_before_allowance =
        convert_from_annual(annual_contribution_before_allowance, period);

    let allowance_remaining = (config.employment_allowance - allowance_used).max(Decimal::ZERO);
    let annual_allowance_claimed = annual_contribution_before_allowance.min(allowance_remaining);
    let annual_contribution = annual_contribution_before_allowance - annual_allowance_claimed;

    EmployerNicResult {
        annual_earnings,
        annual_contribution_before_allowance,
        contribution_before_allowance,
        allowance_remaining,
        annual_allowance_claimed,
        allowance_claimed: convert_from_annual(annual_allowance_claimed, period),
        annual_contribution,
        contribution: convert_from_annual(annual_contribution, period),
    }
}

/// Calculates employee and employer National Insurance together.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for the period
/// * `category` - The employee's NIC category
/// * `period` - The cadence of `gross_pay`
/// * `allowance_used` - Employment Allowance already claimed this tax year
/// * `config` - The tax year's National Insurance tables
///
/// `category` is already parsed, so an unknown letter such as `Q` never
/// reaches this function: `NicCategory::from_str` rejects it with
/// `InvalidNicCategory` ("Invalid NIC category: Q").
pub fn calculate_full_nic(
    gross_pay: Decimal,
    category: NicCategory,
    period: PeriodType,
    allowance_used: Decimal,
    config: &NationalInsuranceConfig,
) -> EngineResult<NicResult> {
    let employee = calculate_employee_nic(gross_pay, category, period, config)?;
    let employer = calculate_employer_nic(gross_pay, period, allowance_used, &config.employer);

    Ok(NicResult { employee, employer })
}
