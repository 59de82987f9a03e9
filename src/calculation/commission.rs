//! Commission calculation.
//!
//! Commission is earned on the after-tax total above the employee's
//! threshold. Below the threshold no commission accrues and nothing is
//! clawed back.

use crate::models::AuditStep;

/// The result of a commission calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CommissionResult {
    /// The commission earned this month.
    pub commission: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates an employee's commission for the month.
///
/// `commission = max(after_taxes - threshold, 0) * commission_percent`. The
/// excess is floored at zero before the percentage is applied, so a month
/// under the threshold yields exactly 0.0.
///
/// # Arguments
///
/// * `after_taxes` - The after-tax billed total
/// * `threshold` - The after-tax amount that must be exceeded before
///   commission accrues
/// * `commission_percent` - The fraction of the excess paid as commission
/// * `step_number` - The sequential audit step number
///
/// # Example
///
/// ```
/// use salon_payroll::calculation::{calculate_commission, round_currency};
///
/// let result = calculate_commission(1540.0, 1410.0, 0.15, 3);
/// assert_eq!(round_currency(result.commission), 19.5);
/// ```
pub fn calculate_commission(
    after_taxes: f64,
    threshold: f64,
    commission_percent: f64,
    step_number: u32,
) -> CommissionResult {
    let excess = (after_taxes - threshold).max(0.0);
    let commission = excess * commission_percent;

    let audit_step = AuditStep {
        step_number,
        rule_id: "commission".to_string(),
        rule_name: "Commission Above Threshold".to_string(),
        input: serde_json::json!({
            "after_taxes": after_taxes,
            "threshold": threshold,
            "commission_percent": commission_percent
        }),
        output: serde_json::json!({
            "excess": excess,
            "commission": commission
        }),
        reasoning: if excess > 0.0 {
            format!(
                "After-tax total {} exceeds threshold {} by {}; commission at {} is {}",
                after_taxes, threshold, excess, commission_percent, commission
            )
        } else {
            format!(
                "After-tax total {} does not exceed threshold {}; no commission",
                after_taxes, threshold
            )
        },
    };

    CommissionResult {
        commission,
        audit_step,
    }
}
