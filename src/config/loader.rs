//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    IncomeTaxConfig, NationalInsuranceConfig, StudentLoansConfig, TaxYearConfig, TaxYearMetadata,
};

/// Loads and provides access to one tax year's rate tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into a [`TaxYearConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/2025-26/
/// ├── tax_year.yaml            # Tax year metadata
/// ├── income_tax.yaml          # Income tax bands and flat-rate codes
/// ├── national_insurance.yaml  # Employee and employer NIC tables
/// └── student_loans.yaml       # Student loan plans
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/2025-26").unwrap();
/// println!("Loaded tax year: {}", loader.metadata().tax_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

/// Top-level layout of income_tax.yaml.
#[derive(Debug, Deserialize)]
struct IncomeTaxFile {
    income_tax: IncomeTaxConfig,
}

/// Top-level layout of national_insurance.yaml.
#[derive(Debug, Deserialize)]
struct NationalInsuranceFile {
    national_insurance: NationalInsuranceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/2025-26")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    /// - The tables break an invariant checked by [`TaxYearConfig::new`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paye_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/2025-26")?;
    /// # Ok::<(), paye_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TaxYearMetadata>(&path.join("tax_year.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxFile>(&path.join("income_tax.yaml"))?;
        let national_insurance =
            Self::load_yaml::<NationalInsuranceFile>(&path.join("national_insurance.yaml"))?;
        let student_loans =
            Self::load_yaml::<StudentLoansConfig>(&path.join("student_loans.yaml"))?;

        let config = TaxYearConfig::new(
            metadata,
            income_tax.income_tax,
            national_insurance.national_insurance,
            student_loans,
        )?;

        info!(
            tax_year = %config.metadata().tax_year,
            path = %path.display(),
            "Loaded tax year configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: TaxYearConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tax-year configuration.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Returns the tax year metadata.
    pub fn metadata(&self) -> &TaxYearMetadata {
        self.config.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::dec;
    use crate::models::{NicCategory, StudentLoanPlan};
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/2025-26"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().tax_year, "2025-26");
        assert_eq!(loader.metadata().jurisdiction, "rUK");
    }

    #[test]
    fn test_income_tax_bands_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let bands = &loader.config().income_tax().bands;

        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].name, "personal_allowance");
        assert_eq!(bands[0].upper, Some(dec("12570")));
        assert_eq!(bands[1].rate, dec("0.20"));
        assert_eq!(bands[2].upper, Some(dec("125140")));
        assert_eq!(bands[3].upper, None);
        assert_eq!(bands[3].rate, dec("0.45"));
    }

    #[test]
    fn test_national_insurance_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ni = loader.config().national_insurance();

        let a = ni.employee_rates(NicCategory::A).unwrap();
        assert_eq!(a.primary_threshold, dec("12570"));
        assert_eq!(a.upper_threshold, dec("50270"));
        assert_eq!(a.primary_rate, dec("0.08"));
        assert_eq!(a.upper_rate, dec("0.02"));

        let c = ni.employee_rates(NicCategory::C).unwrap();
        assert_eq!(c.primary_rate, Decimal::ZERO);
        assert_eq!(c.upper_rate, Decimal::ZERO);

        assert_eq!(ni.employer.secondary_threshold, dec("5000"));
        assert_eq!(ni.employer.secondary_rate, dec("0.15"));
        assert_eq!(ni.employer.employment_allowance, dec("10500"));
    }

    #[test]
    fn test_student_loans_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let loans = loader.config().student_loans();

        assert_eq!(loans.plan(StudentLoanPlan::Plan1).unwrap().threshold, dec("26065"));
        assert_eq!(loans.plan(StudentLoanPlan::Plan2).unwrap().threshold, dec("28470"));
        assert_eq!(loans.plan(StudentLoanPlan::Plan4).unwrap().threshold, dec("32745"));
        assert_eq!(loans.plan(StudentLoanPlan::Postgrad).unwrap().rate, dec("0.06"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tax_year.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
