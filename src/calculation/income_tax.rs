//! PAYE income tax calculation.
//!
//! This module applies the personal allowance resolved from a tax code and
//! the marginal income tax bands to a period's gross pay.
//!
//! ## Algorithm
//!
//! 1. Resolve the annual personal allowance from the tax code (`K` codes
//!    resolve to a negative allowance, which increases taxable income).
//! 2. Annualise gross pay.
//! 3. Taxable income is `max(0, annual gross - allowance)`.
//! 4. Walk the chargeable bands in ascending order, charging
//!    `min(remaining, band width)` at each band's rate until nothing remains.
//! 5. Convert the annual tax back to the period.
//!
//! `NT` codes are never taxed. `BR`, `D0` and `D1` skip the band walk and
//! charge all taxable income at one band's rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::IncomeTaxConfig;
use crate::error::EngineResult;
use crate::models::{PeriodType, TaxBandBreakdown, TaxCode};

use super::{convert_from_annual, convert_to_annual};

/// The result of an income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// Gross pay annualised.
    pub annual_gross: Decimal,
    /// Annual personal allowance, `None` for `NT`.
    pub personal_allowance: Option<Decimal>,
    /// Annual taxable income.
    pub annual_taxable_income: Decimal,
    /// Taxable income for the period.
    pub taxable_income: Decimal,
    /// Annual tax.
    pub annual_tax: Decimal,
    /// Tax due for the period.
    pub tax_due: Decimal,
    /// Per-band detail in annual units. Bands that absorbed no income are
    /// omitted.
    pub bands: Vec<TaxBandBreakdown>,
}

/// Validates a tax code string and returns the parsed code.
///
/// Calculation only accepts a parsed [`TaxCode`], so callers go through
/// this function (or [`TaxCode::from_str`](std::str::FromStr::from_str))
/// before calculating.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::validate_tax_code;
/// use paye_engine::error::EngineError;
///
/// assert!(validate_tax_code("1257L").is_ok());
/// assert!(matches!(
///     validate_tax_code("1257Q"),
///     Err(EngineError::InvalidTaxCode { .. })
/// ));
/// ```
pub fn validate_tax_code(code: &str) -> EngineResult<TaxCode> {
    code.parse()
}

/// Calculates income tax for a period's gross pay.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for the period
/// * `tax_code` - The employee's validated tax code
/// * `period` - The cadence of `gross_pay`
/// * `config` - The tax year's income tax bands
///
/// # Returns
///
/// An [`IncomeTaxResult`] with taxable income and tax due in the period unit,
/// plus the per-band breakdown in annual units. Fails only if a flat-rate
/// code maps to a band the configuration does not define.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_income_tax;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::PeriodType;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/2025-26").unwrap();
/// let result = calculate_income_tax(
///     Decimal::from(60000),
///     &"1257L".parse().unwrap(),
///     PeriodType::Annual,
///     loader.config().income_tax(),
/// )
/// .unwrap();
///
/// assert_eq!(result.taxable_income, Decimal::from(47430));
/// assert_eq!(result.tax_due, Decimal::from(13946));
/// ```
pub fn calculate_income_tax(
    gross_pay: Decimal,
    tax_code: &TaxCode,
    period: PeriodType,
    config: &IncomeTaxConfig,
) -> EngineResult<IncomeTaxResult> {
    let annual_gross = convert_to_annual(gross_pay, period);
    let personal_allowance = tax_code.personal_allowance();

    let annual_taxable_income = match personal_allowance {
        Some(allowance) => (annual_gross - allowance).max(Decimal::ZERO),
        None => Decimal::ZERO,
    };

    let bands = match tax_code.flat_rate() {
        Some(flat_rate) => {
            let band = config.flat_rate_band(flat_rate)?;
            if annual_taxable_income > Decimal::ZERO {
                vec![TaxBandBreakdown {
                    band: band.name.clone(),
                    rate: band.rate,
                    taxable_amount: annual_taxable_income,
                    tax: annual_taxable_income * band.rate,
                }]
            } else {
                Vec::new()
            }
        }
        None => apply_bands(annual_taxable_income, config),
    };

    let annual_tax: Decimal = bands.iter().map(|b| b.tax).sum();

    Ok(IncomeTaxResult {
        annual_gross,
        personal_allowance,
        annual_taxable_income,
        taxable_income: convert_from_annual(annual_taxable_income, period),
        annual_tax,
        tax_due: convert_from_annual(annual_tax, period),
        bands,
    })
}

/// Spreads annual taxable income across the chargeable bands.
fn apply_bands(taxable_income: Decimal, config: &IncomeTaxConfig) -> Vec<TaxBandBreakdown> {
    let mut remaining = taxable_income;
    let mut breakdown = Vec::new();

    for band in config.chargeable_bands() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_amount = match band.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };

        breakdown.push(TaxBandBreakdown {
            band: band.name.clone(),
            rate: band.rate,
            taxable_amount,
            tax: taxable_amount * band.rate,
        });
        remaining -= taxable_amount;
    }

    breakdown
}
