//! Conversion between period amounts and annual amounts.
//!
//! All statutory thresholds are annual, so tax, National Insurance and
//! student loan deductions annualise the period's gross pay, apply the annual
//! tables, and convert the result back. Conversion is an exact
//! multiplication or division by the number of periods in the year.

use rust_decimal::Decimal;

use crate::models::PeriodType;

/// Converts a period amount to its annual equivalent.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::convert_to_annual;
/// use paye_engine::models::PeriodType;
/// use rust_decimal::Decimal;
///
/// assert_eq!(convert_to_annual(Decimal::from(500), PeriodType::Weekly), Decimal::from(26000));
/// assert_eq!(convert_to_annual(Decimal::from(5000), PeriodType::Monthly), Decimal::from(60000));
/// ```
pub fn convert_to_annual(amount: Decimal, period: PeriodType) -> Decimal {
    amount * period.periods_per_year()
}

/// Converts an annual amount to the equivalent for one period.
///
/// No rounding is applied; rounding to pennies is a presentation concern.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::convert_from_annual;
/// use paye_engine::models::PeriodType;
/// use rust_decimal::Decimal;
///
/// assert_eq!(convert_from_annual(Decimal::from(60000), PeriodType::Monthly), Decimal::from(5000));
/// ```
pub fn convert_from_annual(amount: Decimal, period: PeriodType) -> Decimal {
    amount / period.periods_per_year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_weekly_annualises_by_52() {
        assert_eq!(convert_to_annual(dec("400"), PeriodType::Weekly), dec("20800"));
    }

    #[test]
    fn test_monthly_annualises_by_12() {
        assert_eq!(convert_to_annual(dec("2500.50"), PeriodType::Monthly), dec("30006.00"));
    }

    #[test]
    fn test_annual_is_identity() {
        assert_eq!(convert_to_annual(dec("60000"), PeriodType::Annual), dec("60000"));
        assert_eq!(convert_from_annual(dec("60000"), PeriodType::Annual), dec("60000"));
    }

    #[test]
    fn test_round_trip_is_exact_for_every_period() {
        for period in [PeriodType::Weekly, PeriodType::Monthly, PeriodType::Annual] {
            for amount in ["0", "0.01", "123.45", "2083.33", "99999.99"] {
                let x = dec(amount);
                assert_eq!(
                    convert_from_annual(convert_to_annual(x, period), period),
                    x,
                    "round trip failed for {} {}",
                    amount,
                    period
                );
            }
        }
    }

    #[test]
    fn test_from_annual_does_not_round() {
        let weekly = convert_from_annual(dec("1000"), PeriodType::Weekly);
        assert!(weekly > dec("19.23") && weekly < dec("19.24"));
        assert_ne!(weekly, dec("19.23"));
    }
}
