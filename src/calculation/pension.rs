//! Workplace pension contributions.
//!
//! Pension rates apply directly to the period's pensionable earnings. There
//! is no annualisation and no qualifying earnings band.

use rust_decimal::Decimal;

use crate::models::{PensionContribution, PensionSpec};

/// Calculates employee and employer pension contributions for a period.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_pension;
/// use paye_engine::models::PensionSpec;
/// use rust_decimal::Decimal;
///
/// let spec = PensionSpec {
///     employee_rate: Decimal::from(5),
///     employer_rate: Decimal::from(3),
///     pensionable_earnings: None,
/// };
/// let result = calculate_pension(Decimal::from(2500), &spec);
///
/// assert_eq!(result.employee_contribution, Decimal::from(125));
/// assert_eq!(result.employer_contribution, Decimal::from(75));
/// ```
pub fn calculate_pension(gross_pay: Decimal, spec: &PensionSpec) -> PensionContribution {
    let pensionable_earnings = spec.base(gross_pay);

    PensionContribution {
        pensionable_earnings,
        employee_rate: spec.employee_rate,
        employer_rate: spec.employer_rate,
        employee_contribution: pensionable_earnings * spec.employee_rate / Decimal::ONE_HUNDRED,
        employer_contribution: pensionable_earnings * spec.employer_rate / Decimal::ONE_HUNDRED,
    }
}
