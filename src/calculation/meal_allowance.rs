//! Meal allowance calculation.
//!
//! A fixed daily rate multiplied by the worked days of the month. The
//! allowance is disbursed alongside the paycheck but is never part of it.

use crate::models::AuditStep;

/// The statutory meal allowance per worked day, in euros.
pub const DEFAULT_MEAL_ALLOWANCE_PER_DAY: f64 = 4.77;

/// The result of a meal allowance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct MealAllowanceResult {
    /// The meal allowance for the month.
    pub meal_allowance: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the meal allowance for a month's worked days.
///
/// # Arguments
///
/// * `worked_days` - The worked days of the month
/// * `daily_rate` - The allowance per worked day
/// * `step_number` - The sequential audit step number
///
/// # Example
///
/// ```
/// use salon_payroll::calculation::{
///     calculate_meal_allowance, round_currency, DEFAULT_MEAL_ALLOWANCE_PER_DAY,
/// };
///
/// let result = calculate_meal_allowance(21, DEFAULT_MEAL_ALLOWANCE_PER_DAY, 5);
/// assert_eq!(round_currency(result.meal_allowance), 100.17);
/// ```
pub fn calculate_meal_allowance(
    worked_days: u32,
    daily_rate: f64,
    step_number: u32,
) -> MealAllowanceResult {
    let meal_allowance = daily_rate * worked_days as f64;

    let audit_step = AuditStep {
        step_number,
        rule_id: "meal_allowance".to_string(),
        rule_name: "Meal Allowance".to_string(),
        input: serde_json::json!({
            "worked_days": worked_days,
            "daily_rate": daily_rate
        }),
        output: serde_json::json!({
            "meal_allowance": meal_allowance
        }),
        reasoning: format!(
            "{} worked days at {} per day is {}",
            worked_days, daily_rate, meal_allowance
        ),
    };

    MealAllowanceResult {
        meal_allowance,
        audit_step,
    }
}
