//! Bank-transfer and cash payout split.
//!
//! The bank transfer is capped at base salary plus meal allowance; whatever
//! part of the paycheck exceeds that cap is paid in cash.

use crate::models::AuditStep;

/// The result of a payout split, including the audit step.
#[derive(Debug, Clone)]
pub struct PayoutSplitResult {
    /// The portion payable by bank transfer.
    pub bank_transfer: f64,
    /// The portion payable in cash.
    pub in_cash: f64,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits a paycheck into its bank-transfer and cash portions.
///
/// The bank cap is `base_salary + meal_allowance`. The transfer is the
/// smaller of the cap and the commission, and the cash portion is the part
/// of the paycheck above the cap, floored at zero:
///
/// ```text
/// bank_transfer = min(base_salary + meal_allowance, commission)
/// in_cash       = max(paycheck - (base_salary + meal_allowance), 0)
/// ```
///
/// The two portions do not necessarily sum to the paycheck; the split
/// mirrors the salon's historical disbursement sheet exactly.
///
/// # Arguments
///
/// * `paycheck` - Base salary plus commission
/// * `base_salary` - The employee's monthly base salary
/// * `meal_allowance` - The month's meal allowance
/// * `commission` - The month's commission
/// * `step_number` - The sequential audit step number
pub fn calculate_payout_split(
    paycheck: f64,
    base_salary: f64,
    meal_allowance: f64,
    commission: f64,
    step_number: u32,
) -> PayoutSplitResult {
    let bank_cap = base_salary + meal_allowance;
    let bank_transfer = bank_cap.min(commission);
    let in_cash = (paycheck - bank_cap).max(0.0);

    let audit_step = AuditStep {
        step_number,
        rule_id: "payout_split".to_string(),
        rule_name: "Payout Split".to_string(),
        input: serde_json::json!({
            "paycheck": paycheck,
            "base_salary": base_salary,
            "meal_allowance": meal_allowance,
            "commission": commission
        }),
        output: serde_json::json!({
            "bank_cap": bank_cap,
            "bank_transfer": bank_transfer,
            "in_cash": in_cash
        }),
        reasoning: format!(
            "Bank cap {} against commission {} gives transfer {}; {} of paycheck {} remains in cash",
            bank_cap, commission, bank_transfer, in_cash, paycheck
        ),
    };

    PayoutSplitResult {
        bank_transfer,
        in_cash,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_currency;

    /// PS-001: commission below the bank cap transfers in full
    #[test]
    fn test_commission_below_cap() {
        // Base 627.45, allowance 100.17, commission 19.5, paycheck 646.95.
        let result = calculate_payout_split(646.95, 627.45, 100.17, 19.5, 1);

        assert_eq!(round_currency(result.bank_transfer), 19.5);
        assert_eq!(result.in_cash, 0.0);
    }

    /// PS-002: paycheck above the cap spills into cash
    #[test]
    fn test_paycheck_above_cap() {
        // Base 0, allowance 100.17, commission 354, paycheck 354.
        let result = calculate_payout_split(354.0, 0.0, 100.17, 354.0, 1);

        assert_eq!(round_currency(result.bank_transfer), 100.17);
        assert_eq!(round_currency(result.in_cash), 253.83);
    }

    /// PS-003: no commission means no transfer
    #[test]
    fn test_no_commission() {
        let result = calculate_payout_split(627.45, 627.45, 104.94, 0.0, 1);

        assert_eq!(result.bank_transfer, 0.0);
        assert_eq!(result.in_cash, 0.0);
    }

    /// PS-004: zero everything
    #[test]
    fn test_all_zero() {
        let result = calculate_payout_split(0.0, 0.0, 0.0, 0.0, 1);

        assert_eq!(result.bank_transfer, 0.0);
        assert_eq!(result.in_cash, 0.0);
    }

    #[test]
    fn test_audit_step_records_cap() {
        let result = calculate_payout_split(646.95, 627.45, 100.17, 19.5, 6);
        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "payout_split");

        let bank_cap = result.audit_step.output["bank_cap"].as_f64().unwrap();
        assert_eq!(round_currency(bank_cap), 727.62);
    }
}
