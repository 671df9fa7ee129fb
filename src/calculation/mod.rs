//! Calculation logic for the PAYE engine.
//!
//! This module contains the statutory calculators: period conversion,
//! income tax, employee and employer National Insurance, student loan
//! repayments and workplace pension contributions. The payroll
//! orchestrator combines them into a single result per employee, and the
//! payslip generator turns a result into rounded, itemised lines.
//!
//! Every calculator is a pure function of its inputs and a borrowed
//! configuration table. No calculator rounds; rounding happens only when a
//! payslip is generated.

mod income_tax;
mod national_insurance;
mod payroll;
mod payslip;
mod pension;
mod period_conversion;
mod student_loan;

pub use income_tax::{IncomeTaxResult, calculate_income_tax, validate_tax_code};
pub use national_insurance::{
    EmployeeNicResult, EmployerNicResult, NicResult, calculate_employee_nic,
    calculate_employer_nic, calculate_full_nic,
};
pub use payroll::{calculate_batch_payroll, calculate_payroll};
pub use payslip::{ENGINE_VERSION, generate_payslip};
pub use pension::calculate_pension;
pub use period_conversion::{convert_from_annual, convert_to_annual};
pub use student_loan::calculate_student_loan;
