//! Receipt totalling.
//!
//! Sums the amounts an employee billed over a month. The sum is seeded at
//! zero, so a month without receipts totals 0.0 rather than failing.

use crate::models::{AuditStep, Receipt};

/// The result of totalling a month's receipts, including the audit step.
#[derive(Debug, Clone)]
pub struct ReceiptTotalResult {
    /// The sum of all receipt amounts.
    pub total: f64,
    /// The audit step recording this summation.
    pub audit_step: AuditStep,
}

/// Sums the receipt amounts for one employee's month.
///
/// The caller is responsible for filtering the receipts down to the employee
/// and month in question; this function sums whatever it is given, in the
/// order given. Negative amounts (corrections) participate like any other.
///
/// # Arguments
///
/// * `receipts` - The receipts to total
/// * `step_number` - The sequential audit step number
pub fn calculate_receipt_total(receipts: &[Receipt], step_number: u32) -> ReceiptTotalResult {
    let total: f64 = receipts.iter().fold(0.0, |acc, r| acc + r.amount);

    let audit_step = AuditStep {
        step_number,
        rule_id: "receipt_total".to_string(),
        rule_name: "Receipt Total".to_string(),
        input: serde_json::json!({
            "receipt_count": receipts.len()
        }),
        output: serde_json::json!({
            "total": total
        }),
        reasoning: format!("Summed {} receipts to a total of {}", receipts.len(), total),
    };

    ReceiptTotalResult { total, audit_step }
}
