//! PAYE tax codes.
//!
//! A tax code encodes how much personal allowance an employee receives. The
//! [`TaxCode`] type only ever holds a code that matched one of the recognised
//! patterns: parsing is the validation step, so a malformed code cannot reach
//! the income tax calculator.
//!
//! | Pattern      | Meaning                                                   |
//! |--------------|-----------------------------------------------------------|
//! | `<n>L/M/N`   | allowance of `n × 10`                                     |
//! | `BR`         | no allowance, all income at the basic rate                |
//! | `D0`         | no allowance, all income at the higher rate               |
//! | `D1`         | no allowance, all income at the additional rate           |
//! | `NT`         | no tax at all                                             |
//! | `K<n>`       | negative allowance of `n × 10`, added to taxable income   |

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The letter suffix of a standard allowance code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowanceSuffix {
    /// Standard personal allowance.
    L,
    /// Recipient of a transferred marriage allowance.
    M,
    /// Transferor of a marriage allowance.
    N,
}

impl AllowanceSuffix {
    fn as_char(self) -> char {
        match self {
            AllowanceSuffix::L => 'L',
            AllowanceSuffix::M => 'M',
            AllowanceSuffix::N => 'N',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(AllowanceSuffix::L),
            'M' => Some(AllowanceSuffix::M),
            'N' => Some(AllowanceSuffix::N),
            _ => None,
        }
    }
}

/// The flat-rate codes that tax every pound of income at a single band rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatRate {
    /// `BR`: basic rate.
    Basic,
    /// `D0`: higher rate.
    Higher,
    /// `D1`: additional rate.
    Additional,
}

/// A validated PAYE tax code.
///
/// Tax codes (de)serialise as their canonical string form and go through
/// [`TaxCode::from_str`] on the way in.
///
/// # Example
///
/// ```
/// use paye_engine::models::TaxCode;
/// use rust_decimal::Decimal;
///
/// let code: TaxCode = "1257L".parse().unwrap();
/// assert_eq!(code.personal_allowance(), Some(Decimal::from(12570)));
///
/// let k_code: TaxCode = "K475".parse().unwrap();
/// assert_eq!(k_code.personal_allowance(), Some(Decimal::from(-4750)));
///
/// assert!("1257X".parse::<TaxCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxCode {
    /// `<n>L`, `<n>M` or `<n>N`.
    Standard {
        /// The numeric part of the code.
        number: u32,
        /// The letter suffix.
        suffix: AllowanceSuffix,
    },
    /// `BR`, `D0` or `D1`.
    FlatRate(FlatRate),
    /// `NT`.
    NoTax,
    /// `K<n>`.
    K {
        /// The numeric part of the code.
        number: u32,
    },
}

impl TaxCode {
    /// Resolves the annual personal allowance for this code.
    ///
    /// Returns `None` for `NT`, which behaves like an unlimited allowance.
    /// `K` codes return a negative allowance: subtracting it from gross pay
    /// increases taxable income.
    pub fn personal_allowance(&self) -> Option<Decimal> {
        match self {
            TaxCode::Standard { number, .. } => Some(Decimal::from(*number) * Decimal::TEN),
            TaxCode::FlatRate(_) => Some(Decimal::ZERO),
            TaxCode::NoTax => None,
            TaxCode::K { number } => Some(-(Decimal::from(*number) * Decimal::TEN)),
        }
    }

    /// Returns the flat rate this code applies, if it is `BR`, `D0` or `D1`.
    pub fn flat_rate(&self) -> Option<FlatRate> {
        match self {
            TaxCode::FlatRate(rate) => Some(*rate),
            _ => None,
        }
    }
}

impl FromStr for TaxCode {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        let invalid = || EngineError::InvalidTaxCode {
            code: s.to_string(),
        };

        match normalized.as_str() {
            "BR" => return Ok(TaxCode::FlatRate(FlatRate::Basic)),
            "D0" => return Ok(TaxCode::FlatRate(FlatRate::Higher)),
            "D1" => return Ok(TaxCode::FlatRate(FlatRate::Additional)),
            "NT" => return Ok(TaxCode::NoTax),
            _ => {}
        }

        if let Some(digits) = normalized.strip_prefix('K') {
            let number = parse_digits(digits).ok_or_else(invalid)?;
            return Ok(TaxCode::K { number });
        }

        let mut chars = normalized.chars();
        let suffix = chars
            .next_back()
            .and_then(AllowanceSuffix::from_char)
            .ok_or_else(invalid)?;
        let number = parse_digits(chars.as_str()).ok_or_else(invalid)?;

        Ok(TaxCode::Standard { number, suffix })
    }
}

/// Parses a non-empty run of ASCII digits.
fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for TaxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxCode::Standard { number, suffix } => write!(f, "{}{}", number, suffix.as_char()),
            TaxCode::FlatRate(FlatRate::Basic) => f.write_str("BR"),
            TaxCode::FlatRate(FlatRate::Higher) => f.write_str("D0"),
            TaxCode::FlatRate(FlatRate::Additional) => f.write_str("D1"),
            TaxCode::NoTax => f.write_str("NT"),
            TaxCode::K { number } => write!(f, "K{}", number),
        }
    }
}

impl TryFrom<String> for TaxCode {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<TaxCode> for String {
    fn from(code: TaxCode) -> Self {
        code.to_string()
    }
}
