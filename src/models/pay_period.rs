//! Pay period cadence.
//!
//! This module contains the [`PeriodType`] enum describing how often a gross
//! pay figure is paid. Every statutory threshold is defined annually, so the
//! period type determines how a pay figure is annualised and converted back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The cadence at which a gross pay figure is expressed.
///
/// # Example
///
/// ```
/// use paye_engine::models::PeriodType;
/// use rust_decimal::Decimal;
///
/// assert_eq!(PeriodType::Weekly.periods_per_year(), Decimal::from(52));
/// assert_eq!(PeriodType::Monthly.periods_per_year(), Decimal::from(12));
/// assert_eq!(PeriodType::Annual.periods_per_year(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// Paid every week (52 periods per year).
    Weekly,
    /// Paid every calendar month (12 periods per year).
    Monthly,
    /// Paid once a year.
    Annual,
}

impl PeriodType {
    /// Returns the number of pay periods in a tax year.
    ///
    /// The count is fixed per period type. There is no day-count or leap-year
    /// correction, so a 53rd pay week is not modelled.
    pub fn periods_per_year(self) -> Decimal {
        match self {
            PeriodType::Weekly => Decimal::from(52),
            PeriodType::Monthly => Decimal::from(12),
            PeriodType::Annual => Decimal::ONE,
        }
    }

    /// Returns the snake_case name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
            PeriodType::Annual => "annual",
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
