//! Employee identity fields for payslips.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The static identity fields printed on a payslip.
///
/// None of these fields affect the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's National Insurance number, if known.
    #[serde(default)]
    pub ni_number: Option<String>,
    /// The date the pay is made.
    pub pay_date: NaiveDate,
}
