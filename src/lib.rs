//! PAYE Payroll Engine for UK statutory deductions
//!
//! This crate calculates income tax, National Insurance contributions,
//! student loan repayments and workplace pension contributions for an
//! employee's pay period, using one tax year's rate tables loaded from YAML.
//! It also produces itemised payslips and exposes the calculations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
