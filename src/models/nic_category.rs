//! National Insurance category letters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A National Insurance category letter.
///
/// Each letter selects one row of the employee rate table. Categories `C`,
/// `S`, `X` and `Z` carry zero employee rates in the shipped tables; that is
/// a property of the table, not an error.
///
/// Any letter outside the nine recognised categories fails to parse with
/// [`EngineError::InvalidNicCategory`]. There is no fallback category.
///
/// # Example
///
/// ```
/// use paye_engine::models::NicCategory;
///
/// let category: NicCategory = "A".parse().unwrap();
/// assert_eq!(category, NicCategory::A);
///
/// let error = "Q".parse::<NicCategory>().unwrap_err();
/// assert_eq!(error.to_string(), "Invalid NIC category: Q");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NicCategory {
    /// Standard rate.
    A,
    /// Married women and widows entitled to pay reduced rates.
    B,
    /// Over state pension age.
    C,
    /// Apprentice under 25.
    H,
    /// Deferred contributions.
    J,
    /// Deferred apprentice under 25.
    L,
    /// Over state pension age, reduced-rate election.
    S,
    /// Not liable to pay National Insurance.
    X,
    /// Under 21, deferred.
    Z,
}

impl NicCategory {
    /// Every recognised category, in table order.
    pub const ALL: [NicCategory; 9] = [
        NicCategory::A,
        NicCategory::B,
        NicCategory::C,
        NicCategory::H,
        NicCategory::J,
        NicCategory::L,
        NicCategory::S,
        NicCategory::X,
        NicCategory::Z,
    ];

    /// Returns the single-letter code used in rate tables and on the wire.
    pub fn code(self) -> &'static str {
        match self {
            NicCategory::A => "A",
            NicCategory::B => "B",
            NicCategory::C => "C",
            NicCategory::H => "H",
            NicCategory::J => "J",
            NicCategory::L => "L",
            NicCategory::S => "S",
            NicCategory::X => "X",
            NicCategory::Z => "Z",
        }
    }
}

impl FromStr for NicCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        NicCategory::ALL
            .into_iter()
            .find(|category| category.code() == normalized)
            .ok_or_else(|| EngineError::InvalidNicCategory {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for NicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for NicCategory {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<NicCategory> for String {
    fn from(category: NicCategory) -> Self {
        category.code().to_string()
    }
}
