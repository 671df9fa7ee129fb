//! Payslip generation.
//!
//! A payslip itemises a [`PayrollResult`] for one employee. Every line is
//! rounded to pennies (banker's rounding) and the totals are summed from
//! the rounded lines, so the payslip always adds up on paper even where the
//! unrounded engine figures carry more precision.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    EmployeeDetails, PayrollInput, PayrollResult, Payslip, PayslipLine, YearToDate,
};

/// Version stamped on generated payslips.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn line(code: &str, description: impl Into<String>, amount: Decimal) -> PayslipLine {
    PayslipLine {
        code: code.to_string(),
        description: description.into(),
        amount: amount.round_dp(2),
    }
}

/// Builds a payslip from a payroll result.
///
/// `input` supplies the tax code and NIC category the result was
/// calculated with. Income tax and employee National Insurance always
/// appear as deduction lines; student loan and pension lines appear only
/// when the result carries them. Year-to-date figures start at zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use paye_engine::calculation::{calculate_payroll, generate_payslip};
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::{EmployeeDetails, NicCategory, PayrollInput, PeriodType};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/2025-26").unwrap();
/// let input = PayrollInput {
///     gross_pay: Decimal::from(5000),
///     tax_code: "1257L".parse().unwrap(),
///     nic_category: NicCategory::A,
///     period: PeriodType::Monthly,
///     student_loan: None,
///     pension: None,
///     employment_allowance_used: Decimal::ZERO,
/// };
/// let employee = EmployeeDetails {
///     id: "emp_001".to_string(),
///     name: "Alex Smith".to_string(),
///     ni_number: None,
///     pay_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
/// };
///
/// let result = calculate_payroll(&input, loader.config()).unwrap();
/// let payslip = generate_payslip(&result, &input, &employee);
///
/// assert_eq!(payslip.net_pay, Decimal::new(357028, 2));
/// ```
pub fn generate_payslip(
    result: &PayrollResult,
    input: &PayrollInput,
    employee: &EmployeeDetails,
) -> Payslip {
    let payments = vec![line("basic_pay", "Basic pay", result.gross_pay)];

    let mut deductions = vec![
        line("income_tax", "Income Tax (PAYE)", result.income_tax),
        line("employee_nic", "National Insurance", result.employee_nic),
    ];
    if let Some(student_loan) = &result.breakdown.student_loan {
        deductions.push(line(
            "student_loan",
            format!("Student Loan ({})", student_loan.plan),
            student_loan.deduction,
        ));
    }
    if let Some(pension) = &result.breakdown.pension {
        deductions.push(line(
            "employee_pension",
            "Pension (employee)",
            pension.employee_contribution,
        ));
    }

    let mut employer_contributions = vec![line(
        "employer_nic",
        "Employer National Insurance",
        result.employer_nic,
    )];
    if let Some(pension) = &result.breakdown.pension {
        employer_contributions.push(line(
            "employer_pension",
            "Pension (employer)",
            pension.employer_contribution,
        ));
    }

    let gross_pay: Decimal = payments.iter().map(|l| l.amount).sum();
    let total_deductions: Decimal = deductions.iter().map(|l| l.amount).sum();

    Payslip {
        payslip_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        ni_number: employee.ni_number.clone(),
        tax_code: input.tax_code,
        nic_category: input.nic_category,
        period: result.period,
        pay_date: employee.pay_date,
        payments,
        deductions,
        employer_contributions,
        gross_pay,
        total_deductions,
        net_pay: gross_pay - total_deductions,
        year_to_date: YearToDate::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_payroll;
    use crate::config::test_support::{dec, tax_year_2025_26};
    use crate::models::{NicCategory, PensionSpec, PeriodType, StudentLoanPlan};
    use chrono::NaiveDate;

    fn employee() -> EmployeeDetails {
        EmployeeDetails {
            id: "emp_001".to_string(),
            name: "Alex Smith".to_string(),
            ni_number: Some("QQ123456C".to_string()),
            pay_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        }
    }

    fn input(gross: &str) -> PayrollInput {
        PayrollInput {
            gross_pay: dec(gross),
            tax_code: "1257L".parse().unwrap(),
            nic_category: NicCategory::A,
            period: PeriodType::Monthly,
            student_loan: None,
            pension: None,
            employment_allowance_used: Decimal::ZERO,
        }
    }

    fn payslip_for(input: &PayrollInput) -> Payslip {
        let config = tax_year_2025_26();
        let result = calculate_payroll(input, &config).unwrap();
        generate_payslip(&result, input, &employee())
    }

    /// PS-001: lines are rounded and totals add up from the rounded lines
    #[test]
    fn test_monthly_payslip_rounding() {
        let payslip = payslip_for(&input("5000"));

        assert_eq!(payslip.deductions.len(), 2);
        assert_eq!(payslip.deductions[0].code, "income_tax");
        assert_eq!(payslip.deductions[0].amount, dec("1162.17"));
        assert_eq!(payslip.deductions[1].amount, dec("267.55"));
        assert_eq!(payslip.gross_pay, dec("5000"));
        assert_eq!(payslip.total_deductions, dec("1429.72"));
        assert_eq!(payslip.net_pay, dec("3570.28"));
    }

    #[test]
    fn test_optional_lines_present_when_configured() {
        let input = PayrollInput {
            student_loan: Some(StudentLoanPlan::Plan2),
            pension: Some(PensionSpec {
                employee_rate: dec("5"),
                employer_rate: dec("3"),
                pensionable_earnings: None,
            }),
            ..input("3000")
        };
        let payslip = payslip_for(&input);

        let codes: Vec<&str> = payslip.deductions.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["income_tax", "employee_nic", "student_loan", "employee_pension"]
        );
        assert_eq!(payslip.deductions[2].description, "Student Loan (plan2)");
        // 56.475 rounds half to even
        assert_eq!(payslip.deductions[2].amount, dec("56.48"));
        assert_eq!(payslip.deductions[3].amount, dec("150"));

        assert_eq!(payslip.employer_contributions.len(), 2);
        assert_eq!(payslip.employer_contributions[1].amount, dec("90"));
    }

    #[test]
    fn test_payslip_identity_fields() {
        let payslip = payslip_for(&input("2000"));

        assert_eq!(payslip.employee_id, "emp_001");
        assert_eq!(payslip.ni_number.as_deref(), Some("QQ123456C"));
        assert_eq!(payslip.tax_code.to_string(), "1257L");
        assert_eq!(payslip.nic_category, NicCategory::A);
        assert_eq!(payslip.period, PeriodType::Monthly);
        assert_eq!(payslip.engine_version, ENGINE_VERSION);
        assert_eq!(payslip.year_to_date, YearToDate::default());
    }

    #[test]
    fn test_payslips_get_distinct_ids() {
        let a = payslip_for(&input("2000"));
        let b = payslip_for(&input("2000"));
        assert_ne!(a.payslip_id, b.payslip_id);
    }
}
