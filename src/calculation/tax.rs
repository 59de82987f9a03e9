//! Two-rate tax application.
//!
//! Splits the billed total into a taxed slice and an untaxed slice. The
//! taxed slice keeps `1 - tax` of its value, the untaxed slice passes
//! through untouched:
//!
//! ```text
//! after_taxes = total * taxed_percent * (1 - tax) + total * (1 - taxed_percent)
//! ```

use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// An employee's tax treatment for the billed total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// The tax rate applied to the taxed slice (0.0 to 1.0).
    pub tax: f64,
    /// The fraction of the billed total that is subject to tax (0.0 to 1.0).
    pub taxed_percent: f64,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            tax: 0.23,
            taxed_percent: 1.0,
        }
    }
}

impl TaxPolicy {
    /// A policy taxing the full billed total at the given rate.
    pub fn flat(rate: f64) -> Self {
        Self {
            tax: rate,
            taxed_percent: 1.0,
        }
    }
}

/// The result of applying the tax policy, including the audit step.
#[derive(Debug, Clone)]
pub struct AfterTaxResult {
    /// The billed total after the two-rate split.
    pub after_taxes: f64,
    /// The audit step recording this application.
    pub audit_step: AuditStep,
}

/// Applies an employee's tax policy to the billed total.
///
/// # Arguments
///
/// * `total` - The billed total for the month
/// * `policy` - The employee's tax policy
/// * `step_number` - The sequential audit step number
///
/// # Example
///
/// ```
/// use salon_payroll::calculation::{apply_tax_policy, round_currency, TaxPolicy};
///
/// let result = apply_tax_policy(2000.0, TaxPolicy::default(), 2);
/// assert_eq!(round_currency(result.after_taxes), 1540.0);
/// ```
pub fn apply_tax_policy(total: f64, policy: TaxPolicy, step_number: u32) -> AfterTaxResult {
    let taxed_slice = total * policy.taxed_percent * (1.0 - policy.tax);
    let untaxed_slice = total * (1.0 - policy.taxed_percent);
    let after_taxes = taxed_slice + untaxed_slice;

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_policy".to_string(),
        rule_name: "Tax Policy Application".to_string(),
        input: serde_json::json!({
            "total": total,
            "tax": policy.tax,
            "taxed_percent": policy.taxed_percent
        }),
        output: serde_json::json!({
            "taxed_slice": taxed_slice,
            "untaxed_slice": untaxed_slice,
            "after_taxes": after_taxes
        }),
        reasoning: format!(
            "Taxed {}% of {} at rate {}, leaving {} after taxes",
            policy.taxed_percent * 100.0,
            total,
            policy.tax,
            after_taxes
        ),
    };

    AfterTaxResult {
        after_taxes,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_currency;

    /// TX-001: default policy taxes the full total at 23%
    #[test]
    fn test_default_policy() {
        let result = apply_tax_policy(2000.0, TaxPolicy::default(), 1);
        assert_eq!(round_currency(result.after_taxes), 1540.0);
    }

    /// TX-002: half-taxed split
    #[test]
    fn test_half_taxed_split() {
        let policy = TaxPolicy {
            tax: 0.23,
            taxed_percent: 0.5,
        };
        // 1000 * 0.5 * 0.77 + 1000 * 0.5 = 385 + 500 = 885
        let result = apply_tax_policy(1000.0, policy, 1);
        assert_eq!(round_currency(result.after_taxes), 885.0);
    }

    /// TX-003: zero tax passes the total through
    #[test]
    fn test_zero_tax_passes_through() {
        let result = apply_tax_policy(1234.56, TaxPolicy::flat(0.0), 1);
        assert_eq!(round_currency(result.after_taxes), 1234.56);
    }

    /// TX-004: zero taxed_percent passes the total through
    #[test]
    fn test_zero_taxed_percent_passes_through() {
        let policy = TaxPolicy {
            tax: 0.23,
            taxed_percent: 0.0,
        };
        let result = apply_tax_policy(1234.56, policy, 1);
        assert_eq!(round_currency(result.after_taxes), 1234.56);
    }

    /// TX-005: zero total stays zero
    #[test]
    fn test_zero_total() {
        let result = apply_tax_policy(0.0, TaxPolicy::default(), 1);
        assert_eq!(result.after_taxes, 0.0);
    }

    #[test]
    fn test_flat_policy_taxes_everything() {
        let policy = TaxPolicy::flat(0.115);
        assert_eq!(policy.taxed_percent, 1.0);
        let result = apply_tax_policy(1000.0, policy, 1);
        assert_eq!(round_currency(result.after_taxes), 885.0);
    }

    #[test]
    fn test_audit_step_records_policy() {
        let result = apply_tax_policy(500.0, TaxPolicy::default(), 2);
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "tax_policy");
        assert_eq!(result.audit_step.input["tax"], 0.23);
        assert_eq!(result.audit_step.input["taxed_percent"], 1.0);
    }
}
