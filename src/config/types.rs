//! Configuration types for a tax year.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`TaxYearConfig`] aggregate the calculators read from.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{FlatRate, NicCategory, StudentLoanPlan};

/// Metadata about the tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearMetadata {
    /// The tax year label (e.g., "2025-26").
    pub tax_year: String,
    /// A human-readable name for the rate set.
    pub name: String,
    /// The jurisdiction the rates apply to (e.g., "rUK").
    pub jurisdiction: String,
    /// URL to the published rates.
    pub source_url: String,
}

/// One income tax band.
///
/// `upper` is `None` only for the final, unbounded band.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBand {
    /// Band name (e.g., "basic").
    pub name: String,
    /// Lower bound of the band.
    pub lower: Decimal,
    /// Upper bound of the band, `None` if unbounded.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.20 for 20%).
    pub rate: Decimal,
}

impl TaxBand {
    /// Returns the width of the band, `None` if unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.upper.map(|upper| upper - self.lower)
    }
}

/// Which band each flat-rate tax code charges at.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatRateBands {
    /// Band used by `BR`.
    pub br: String,
    /// Band used by `D0`.
    pub d0: String,
    /// Band used by `D1`.
    pub d1: String,
}

/// Income tax configuration from income_tax.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// Bands in ascending order. The first is the zero-rate personal
    /// allowance band.
    pub bands: Vec<TaxBand>,
    /// Flat-rate code mapping.
    pub flat_rate_bands: FlatRateBands,
}

impl IncomeTaxConfig {
    /// Returns the bands that tax income once the personal allowance has
    /// been deducted.
    ///
    /// The personal allowance band is absorbed by the allowance itself, so
    /// banding starts at the band after it.
    pub fn chargeable_bands(&self) -> &[TaxBand] {
        self.bands.get(1..).unwrap_or(&[])
    }

    /// Returns the band a flat-rate code charges at.
    pub fn flat_rate_band(&self, flat_rate: FlatRate) -> EngineResult<&TaxBand> {
        let name = match flat_rate {
            FlatRate::Basic => &self.flat_rate_bands.br,
            FlatRate::Higher => &self.flat_rate_bands.d0,
            FlatRate::Additional => &self.flat_rate_bands.d1,
        };
        self.bands
            .iter()
            .find(|band| &band.name == name)
            .ok_or_else(|| EngineError::InvalidConfig {
                message: format!("flat-rate band '{}' is not defined", name),
            })
    }
}

/// Employee National Insurance rates for one category.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeNicRates {
    /// Annual primary threshold.
    pub primary_threshold: Decimal,
    /// Rate between the primary threshold and the upper earnings limit.
    pub primary_rate: Decimal,
    /// Annual upper earnings limit.
    pub upper_threshold: Decimal,
    /// Rate above the upper earnings limit.
    pub upper_rate: Decimal,
}

/// Employer National Insurance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerNicConfig {
    /// Annual secondary threshold.
    pub secondary_threshold: Decimal,
    /// Flat rate above the secondary threshold.
    pub secondary_rate: Decimal,
    /// Annual employment allowance available to the employer.
    pub employment_allowance: Decimal,
}

/// National Insurance configuration from national_insurance.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalInsuranceConfig {
    /// Map of category letter to employee rates.
    pub employee: HashMap<String, EmployeeNicRates>,
    /// Employer rates.
    pub employer: EmployerNicConfig,
}

impl NationalInsuranceConfig {
    /// Looks up the employee rates for a category.
    ///
    /// A missing row is an error, never a default.
    pub fn employee_rates(&self, category: NicCategory) -> EngineResult<&EmployeeNicRates> {
        self.employee
            .get(category.code())
            .ok_or_else(|| EngineError::InvalidNicCategory {
                code: category.code().to_string(),
            })
    }
}

/// Student loan plan parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentLoanRates {
    /// Annual earnings threshold.
    pub threshold: Decimal,
    /// Deduction rate above the threshold.
    pub rate: Decimal,
}

/// Student loan configuration from student_loans.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentLoansConfig {
    /// Map of plan key to plan parameters.
    pub plans: HashMap<String, StudentLoanRates>,
}

impl StudentLoansConfig {
    /// Looks up the parameters for a plan.
    pub fn plan(&self, plan: StudentLoanPlan) -> EngineResult<&StudentLoanRates> {
        self.plans
            .get(plan.key())
            .ok_or_else(|| EngineError::InvalidStudentLoanPlan {
                plan: plan.key().to_string(),
            })
    }
}

/// The complete, validated configuration for one tax year.
///
/// Built once and treated as immutable; the calculators only ever borrow it.
#[derive(Debug, Clone)]
pub struct TaxYearConfig {
    metadata: TaxYearMetadata,
    income_tax: IncomeTaxConfig,
    national_insurance: NationalInsuranceConfig,
    student_loans: StudentLoansConfig,
}

impl TaxYearConfig {
    /// Creates a TaxYearConfig from its component parts, checking every
    /// table invariant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - the bands do not start at zero, are not contiguous, or are not
    ///   strictly increasing
    /// - any band other than the last is unbounded, or the last is bounded
    /// - the first band is not zero-rate
    /// - a flat-rate mapping names an unknown band
    /// - any rate is outside `[0, 1]`
    /// - an NIC category or student loan plan is missing or unknown
    pub fn new(
        metadata: TaxYearMetadata,
        income_tax: IncomeTaxConfig,
        national_insurance: NationalInsuranceConfig,
        student_loans: StudentLoansConfig,
    ) -> EngineResult<Self> {
        validate_income_tax(&income_tax)?;
        validate_national_insurance(&national_insurance)?;
        validate_student_loans(&student_loans)?;

        Ok(Self {
            metadata,
            income_tax,
            national_insurance,
            student_loans,
        })
    }

    /// Returns the tax year metadata.
    pub fn metadata(&self) -> &TaxYearMetadata {
        &self.metadata
    }

    /// Returns the income tax configuration.
    pub fn income_tax(&self) -> &IncomeTaxConfig {
        &self.income_tax
    }

    /// Returns the National Insurance configuration.
    pub fn national_insurance(&self) -> &NationalInsuranceConfig {
        &self.national_insurance
    }

    /// Returns the student loan configuration.
    pub fn student_loans(&self) -> &StudentLoansConfig {
        &self.student_loans
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}

fn check_rate(context: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(invalid(format!(
            "{} rate {} is outside 0..=1",
            context, rate
        )));
    }
    Ok(())
}

fn validate_income_tax(config: &IncomeTaxConfig) -> EngineResult<()> {
    let first = config
        .bands
        .first()
        .ok_or_else(|| invalid("income tax needs at least one band"))?;

    if first.lower != Decimal::ZERO {
        return Err(invalid(format!(
            "first band '{}' must start at 0, starts at {}",
            first.name, first.lower
        )));
    }
    if first.rate != Decimal::ZERO {
        return Err(invalid(format!(
            "first band '{}' is the personal allowance band and must be zero-rate",
            first.name
        )));
    }

    let last_index = config.bands.len() - 1;
    let mut expected_lower = Decimal::ZERO;

    for (index, band) in config.bands.iter().enumerate() {
        check_rate(&format!("band '{}'", band.name), band.rate)?;

        if band.lower != expected_lower {
            return Err(invalid(format!(
                "band '{}' starts at {} but the previous band ends at {}",
                band.name, band.lower, expected_lower
            )));
        }

        match (band.upper, index == last_index) {
            (Some(upper), false) => {
                if upper <= band.lower {
                    return Err(invalid(format!(
                        "band '{}' upper bound {} is not above its lower bound {}",
                        band.name, upper, band.lower
                    )));
                }
                expected_lower = upper;
            }
            (None, true) => {}
            (Some(_), true) => {
                return Err(invalid(format!(
                    "last band '{}' must be unbounded",
                    band.name
                )));
            }
            (None, false) => {
                return Err(invalid(format!(
                    "only the last band may be unbounded, '{}' is not last",
                    band.name
                )));
            }
        }
    }

    for flat_rate in [FlatRate::Basic, FlatRate::Higher, FlatRate::Additional] {
        config.flat_rate_band(flat_rate)?;
    }

    Ok(())
}

fn validate_national_insurance(config: &NationalInsuranceConfig) -> EngineResult<()> {
    for code in config.employee.keys() {
        code.parse::<NicCategory>()
            .map_err(|_| invalid(format!("unknown NIC category '{}' in rate table", code)))?;
    }

    for category in NicCategory::ALL {
        let rates = config
            .employee
            .get(category.code())
            .ok_or_else(|| invalid(format!("NIC category {} has no rates", category)))?;

        check_rate(&format!("category {} primary", category), rates.primary_rate)?;
        check_rate(&format!("category {} upper", category), rates.upper_rate)?;

        if rates.upper_threshold < rates.primary_threshold {
            return Err(invalid(format!(
                "category {} upper threshold {} is below its primary threshold {}",
                category, rates.upper_threshold, rates.primary_threshold
            )));
        }
    }

    check_rate("employer secondary", config.employer.secondary_rate)?;
    if config.employer.employment_allowance < Decimal::ZERO {
        return Err(invalid("employment allowance must not be negative"));
    }

    Ok(())
}

fn validate_student_loans(config: &StudentLoansConfig) -> EngineResult<()> {
    for key in config.plans.keys() {
        key.parse::<StudentLoanPlan>()
            .map_err(|_| invalid(format!("unknown student loan plan '{}'", key)))?;
    }

    for plan in StudentLoanPlan::ALL {
        let rates = config
            .plans
            .get(plan.key())
            .ok_or_else(|| invalid(format!("student loan plan {} has no rates", plan)))?;
        check_rate(&format!("student loan {}", plan), rates.rate)?;
    }

    Ok(())
}
