//! Student loan and pension deduction parameters.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::payroll_input::check_amount;

/// A student loan repayment plan.
///
/// Each plan has an annual earnings threshold and a flat deduction rate
/// applied to earnings above it; both come from the tax-year configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentLoanPlan {
    /// Plan 1.
    Plan1,
    /// Plan 2.
    Plan2,
    /// Plan 4 (Scotland).
    Plan4,
    /// Postgraduate loan.
    Postgrad,
}

impl StudentLoanPlan {
    /// Every supported plan.
    pub const ALL: [StudentLoanPlan; 4] = [
        StudentLoanPlan::Plan1,
        StudentLoanPlan::Plan2,
        StudentLoanPlan::Plan4,
        StudentLoanPlan::Postgrad,
    ];

    /// Returns the key used in configuration files and on the wire.
    pub fn key(self) -> &'static str {
        match self {
            StudentLoanPlan::Plan1 => "plan1",
            StudentLoanPlan::Plan2 => "plan2",
            StudentLoanPlan::Plan4 => "plan4",
            StudentLoanPlan::Postgrad => "postgrad",
        }
    }
}

impl FromStr for StudentLoanPlan {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        StudentLoanPlan::ALL
            .into_iter()
            .find(|plan| plan.key() == normalized)
            .ok_or_else(|| EngineError::InvalidStudentLoanPlan {
                plan: s.to_string(),
            })
    }
}

impl fmt::Display for StudentLoanPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Workplace pension contribution parameters.
///
/// Rates are percentages (`5` means 5%) applied directly to the period's
/// pensionable earnings.
///
/// # Example
///
/// ```
/// use paye_engine::models::PensionSpec;
/// use rust_decimal::Decimal;
///
/// let pension = PensionSpec {
///     employee_rate: Decimal::from(5),
///     employer_rate: Decimal::from(3),
///     pensionable_earnings: None,
/// };
/// assert_eq!(pension.base(Decimal::from(2000)), Decimal::from(2000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionSpec {
    /// Employee contribution as a percentage of pensionable earnings.
    pub employee_rate: Decimal,
    /// Employer contribution as a percentage of pensionable earnings.
    pub employer_rate: Decimal,
    /// Pensionable earnings for the period, when they differ from gross pay.
    #[serde(default)]
    pub pensionable_earnings: Option<Decimal>,
}

impl PensionSpec {
    /// Returns the earnings the percentages apply to.
    pub fn base(&self, gross_pay: Decimal) -> Decimal {
        self.pensionable_earnings.unwrap_or(gross_pay)
    }

    /// Checks that both rates are percentages and the base is a valid amount.
    pub fn validate(&self) -> EngineResult<()> {
        let hundred = Decimal::ONE_HUNDRED;
        for (field, rate) in [
            ("pension.employee_rate", self.employee_rate),
            ("pension.employer_rate", self.employer_rate),
        ] {
            if rate < Decimal::ZERO || rate > hundred {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must be between 0 and 100, got {}", rate),
                });
            }
        }

        if let Some(earnings) = self.pensionable_earnings {
            check_amount("pension.pensionable_earnings", earnings)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_loan_plan_keys_round_trip() {
        for plan in StudentLoanPlan::ALL {
            assert_eq!(plan.key().parse::<StudentLoanPlan>().unwrap(), plan);
            assert_eq!(
                serde_json::to_string(&plan).unwrap(),
                format!("\"{}\"", plan.key())
            );
        }
    }

    #[test]
    fn test_unknown_plan_rejected() {
        match "plan3".parse::<StudentLoanPlan>() {
            Err(EngineError::InvalidStudentLoanPlan { plan }) => assert_eq!(plan, "plan3"),
            other => panic!("Expected InvalidStudentLoanPlan, got {:?}", other),
        }
    }

    #[test]
    fn test_pension_base_defaults_to_gross() {
        let spec = PensionSpec {
            employee_rate: Decimal::from(5),
            employer_rate: Decimal::from(3),
            pensionable_earnings: None,
        };
        assert_eq!(spec.base(Decimal::from(2500)), Decimal::from(2500));

        let spec = PensionSpec {
            pensionable_earnings: Some(Decimal::from(1800)),
            ..spec
        };
        assert_eq!(spec.base(Decimal::from(2500)), Decimal::from(1800));
    }

    #[test]
    fn test_pension_rate_above_hundred_rejected() {
        let spec = PensionSpec {
            employee_rate: Decimal::from(101),
            employer_rate: Decimal::from(3),
            pensionable_earnings: None,
        };
        match spec.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "pension.employee_rate")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_pensionable_earnings_rejected() {
        let spec = PensionSpec {
            employee_rate: Decimal::from(5),
            employer_rate: Decimal::from(3),
            pensionable_earnings: Some(Decimal::from(-1)),
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_huge_pensionable_earnings_rejected() {
        let spec = PensionSpec {
            employee_rate: Decimal::from(100),
            employer_rate: Decimal::from(100),
            pensionable_earnings: Some(Decimal::MAX),
        };
        match spec.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "pension.pensionable_earnings")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_pension_deserializes_without_pensionable_earnings() {
        let spec: PensionSpec =
            serde_json::from_str(r#"{"employee_rate": "5", "employer_rate": "3"}"#).unwrap();
        assert_eq!(spec.pensionable_earnings, None);
        assert_eq!(spec.employee_rate, Decimal::from(5));
    }
}
