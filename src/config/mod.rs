//! Configuration loading and management for the PAYE engine.
//!
//! This module provides functionality to load a tax year's rate tables from
//! YAML files: income tax bands, National Insurance thresholds and rates,
//! and student loan plans. A different tax year is supported by loading a
//! different directory.
//!
//! # Example
//!
//! ```no_run
//! use paye_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/2025-26").unwrap();
//! println!("Loaded tax year: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployeeNicRates, EmployerNicConfig, FlatRateBands, IncomeTaxConfig, NationalInsuranceConfig,
    StudentLoanRates, StudentLoansConfig, TaxBand, TaxYearConfig, TaxYearMetadata,
};

/// In-code 2025-26 tables shared by unit tests, independent of the YAML files.
#[cfg(test)]
pub(crate) mod test_support {
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    use super::*;

    pub(crate) fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn band(name: &str, lower: &str, upper: Option<&str>, rate: &str) -> TaxBand {
        TaxBand {
            name: name.to_string(),
            lower: dec(lower),
            upper: upper.map(dec),
            rate: dec(rate),
        }
    }

    fn nic(primary_rate: &str, upper_rate: &str) -> EmployeeNicRates {
        EmployeeNicRates {
            primary_threshold: dec("12570"),
            primary_rate: dec(primary_rate),
            upper_threshold: dec("50270"),
            upper_rate: dec(upper_rate),
        }
    }

    pub(crate) fn tax_year_2025_26() -> TaxYearConfig {
        let metadata = TaxYearMetadata {
            tax_year: "2025-26".to_string(),
            name: "UK PAYE rates 2025-26".to_string(),
            jurisdiction: "rUK".to_string(),
            source_url: "https://example.com".to_string(),
        };

        let income_tax = IncomeTaxConfig {
            bands: vec![
                band("personal_allowance", "0", Some("12570"), "0"),
                band("basic", "12570", Some("37700"), "0.20"),
                band("higher", "37700", Some("125140"), "0.40"),
                band("additional", "125140", None, "0.45"),
            ],
            flat_rate_bands: FlatRateBands {
                br: "basic".to_string(),
                d0: "higher".to_string(),
                d1: "additional".to_string(),
            },
        };

        let mut employee = HashMap::new();
        for (code, primary, upper) in [
            ("A", "0.08", "0.02"),
            ("B", "0.0185", "0.02"),
            ("C", "0", "0"),
            ("H", "0.08", "0.02"),
            ("J", "0.02", "0.02"),
            ("L", "0.02", "0.02"),
            ("S", "0", "0"),
            ("X", "0", "0"),
            ("Z", "0", "0"),
        ] {
            employee.insert(code.to_string(), nic(primary, upper));
        }

        let national_insurance = NationalInsuranceConfig {
            employee,
            employer: EmployerNicConfig {
                secondary_threshold: dec("5000"),
                secondary_rate: dec("0.15"),
                employment_allowance: dec("10500"),
            },
        };

        let mut plans = HashMap::new();
        for (key, threshold, rate) in [
            ("plan1", "26065", "0.09"),
            ("plan2", "28470", "0.09"),
            ("plan4", "32745", "0.09"),
            ("postgrad", "21000", "0.06"),
        ] {
            plans.insert(
                key.to_string(),
                StudentLoanRates {
                    threshold: dec(threshold),
                    rate: dec(rate),
                },
            );
        }

        TaxYearConfig::new(
            metadata,
            income_tax,
            national_insurance,
            StudentLoansConfig { plans },
        )
        .unwrap()
    }
}
