//! Error types for the PAYE engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading tax-year tables or
//! computing a payroll.

use thiserror::Error;

/// The main error type for the PAYE engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::InvalidNicCategory {
///     code: "Q".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid NIC category: Q");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded rate table breaks one of the table invariants.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// A tax code did not match any recognised pattern.
    #[error("Invalid tax code: {code}")]
    InvalidTaxCode {
        /// The offending tax code as supplied.
        code: String,
    },

    /// A National Insurance category letter is not in the rate table.
    #[error("Invalid NIC category: {code}")]
    InvalidNicCategory {
        /// The offending category code as supplied.
        code: String,
    },

    /// A student loan plan is not one of the supported plans.
    #[error("Invalid student loan plan: {plan}")]
    InvalidStudentLoanPlan {
        /// The offending plan identifier.
        plan: String,
    },

    /// A payroll input field was out of range.
    #[error("Invalid payroll input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/tax_year.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tax_year.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "bands are not contiguous".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: bands are not contiguous"
        );
    }

    #[test]
    fn test_invalid_tax_code_displays_code() {
        let error = EngineError::InvalidTaxCode {
            code: "1257X".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid tax code: 1257X");
    }

    #[test]
    fn test_invalid_nic_category_displays_code() {
        let error = EngineError::InvalidNicCategory {
            code: "Q".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid NIC category: Q");
    }

    #[test]
    fn test_invalid_student_loan_plan_displays_plan() {
        let error = EngineError::InvalidStudentLoanPlan {
            plan: "plan9".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid student loan plan: plan9");
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "gross_pay".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll input field 'gross_pay': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_category() -> EngineResult<()> {
            Err(EngineError::InvalidNicCategory {
                code: "Q".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_category()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
