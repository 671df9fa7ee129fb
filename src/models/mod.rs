//! Core data models for the PAYE engine.
//!
//! This module contains the value objects passed into and returned from the
//! calculators. All of them are constructed fresh per calculation.

mod calculation_result;
mod deductions;
mod employee;
mod nic_category;
mod pay_period;
mod payroll_input;
mod payslip;
mod tax_code;

pub use calculation_result::{
    NicBreakdown, PayrollBreakdown, PayrollResult, PensionContribution, StudentLoanDeduction,
    TaxBandBreakdown,
};
pub use deductions::{PensionSpec, StudentLoanPlan};
pub use employee::EmployeeDetails;
pub use nic_category::NicCategory;
pub use pay_period::PeriodType;
pub use payroll_input::{PayrollInput, MAX_AMOUNT};
pub use payslip::{Payslip, PayslipLine, YearToDate};
pub use tax_code::{AllowanceSuffix, FlatRate, TaxCode};
