//! The monthly salary pipeline.
//!
//! Runs the calculation steps for one employee and month in order: receipt
//! total, tax policy, commission, worked days, meal allowance, and payout
//! split. The pipeline is pure; feeding it the same inputs always yields
//! the same breakdown and audit steps.

use crate::calendar::{days_in_month, weekend_day_count, worked_days};
use crate::models::{AuditStep, Employee, Receipt, SalaryBreakdown};

use super::{
    apply_tax_policy, calculate_commission, calculate_meal_allowance, calculate_payout_split,
    calculate_receipt_total,
};

/// The result of the full salary pipeline for one employee and month.
#[derive(Debug, Clone)]
pub struct SalaryCalculation {
    /// The unrounded paycheck breakdown.
    pub breakdown: SalaryBreakdown,
    /// The audit steps of the pipeline, in execution order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes one employee's monthly paycheck breakdown.
///
/// The caller provides the receipts already filtered to the employee and
/// month, the number of vacation days the employee took in the month, and
/// the number of public holidays falling within the month. Weekend days and
/// days in the month are derived here.
///
/// # Arguments
///
/// * `employee` - The employee to calculate for
/// * `receipts` - The employee's receipts for the month
/// * `vacation_count` - Vacation days taken in the month
/// * `holiday_count` - Public holidays in the month
/// * `year` - The calendar year
/// * `month` - The calendar month (1-12)
/// * `meal_rate` - The meal allowance per worked day
///
/// # Example
///
/// ```
/// use salon_payroll::calculation::{compute_salary, DEFAULT_MEAL_ALLOWANCE_PER_DAY};
/// use salon_payroll::models::{Employee, EmployeeTitle};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Carla".to_string(),
///     title: EmployeeTitle::Hairdresser,
///     base_salary: 627.45,
///     commission_percent: 0.15,
///     threshold_for_commission: 1410.0,
///     tax: 0.23,
///     taxed_percent: 1.0,
///     hire_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
///     termination_date: None,
/// };
///
/// let result = compute_salary(&employee, &[], 0, 0, 2022, 9, DEFAULT_MEAL_ALLOWANCE_PER_DAY);
/// assert_eq!(result.breakdown.worked_days, 22);
/// assert_eq!(result.breakdown.paycheck, 627.45);
/// ```
pub fn compute_salary(
    employee: &Employee,
    receipts: &[Receipt],
    vacation_count: u32,
    holiday_count: u32,
    year: i32,
    month: u32,
    meal_rate: f64,
) -> SalaryCalculation {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let total_result = calculate_receipt_total(receipts, step_number);
    let total_billed = total_result.total;
    audit_steps.push(total_result.audit_step);
    step_number += 1;

    let tax_result = apply_tax_policy(total_billed, employee.tax_policy(), step_number);
    let after_taxes = tax_result.after_taxes;
    audit_steps.push(tax_result.audit_step);
    step_number += 1;

    let commission_result = calculate_commission(
        after_taxes,
        employee.threshold_for_commission,
        employee.commission_percent,
        step_number,
    );
    let commission = commission_result.commission;
    audit_steps.push(commission_result.audit_step);
    step_number += 1;

    let month_days = days_in_month(year, month);
    let weekend_days = weekend_day_count(year, month);
    let worked = worked_days(month_days, weekend_days, holiday_count, vacation_count);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "worked_days".to_string(),
        rule_name: "Worked Days".to_string(),
        input: serde_json::json!({
            "days_in_month": month_days,
            "weekend_days": weekend_days,
            "holiday_count": holiday_count,
            "vacation_count": vacation_count
        }),
        output: serde_json::json!({
            "worked_days": worked
        }),
        reasoning: format!(
            "{} days minus {} weekend, {} holiday, {} vacation leaves {} worked days",
            month_days, weekend_days, holiday_count, vacation_count, worked
        ),
    });
    step_number += 1;

    let meal_result = calculate_meal_allowance(worked, meal_rate, step_number);
    let meal_allowance = meal_result.meal_allowance;
    audit_steps.push(meal_result.audit_step);
    step_number += 1;

    let paycheck = employee.base_salary + commission;

    let split_result = calculate_payout_split(
        paycheck,
        employee.base_salary,
        meal_allowance,
        commission,
        step_number,
    );
    audit_steps.push(split_result.audit_step);

    SalaryCalculation {
        breakdown: SalaryBreakdown {
            total_billed,
            after_taxes,
            commission,
            worked_days: worked,
            meal_allowance,
            paycheck,
            bank_transfer: split_result.bank_transfer,
            in_cash: split_result.in_cash,
        },
        audit_steps,
    }
}
