//! Salary summary models.
//!
//! This module contains the [`SalaryBreakdown`] produced by the pure payroll
//! calculation and the [`SalarySummary`] envelope returned by the API,
//! together with the audit trail types recording every calculation decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{round_currency, round_record};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one formula
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// One employee's monthly paycheck breakdown.
///
/// All monetary fields hold the raw, unrounded values of the calculation;
/// rounding belongs to the display and record steps (see [`Self::rounded`]
/// and [`Self::record_paycheck`]). The meal allowance is disbursed
/// separately and is never part of the headline paycheck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Sum of the month's receipt amounts.
    pub total_billed: f64,
    /// Billed total after the two-rate tax split.
    pub after_taxes: f64,
    /// Commission earned above the threshold.
    pub commission: f64,
    /// Days in the month that are neither weekend, holiday, nor vacation.
    pub worked_days: u32,
    /// Meal allowance for the worked days.
    pub meal_allowance: f64,
    /// Base salary plus commission.
    pub paycheck: f64,
    /// The portion payable by bank transfer.
    pub bank_transfer: f64,
    /// The portion payable in cash.
    pub in_cash: f64,
}

impl SalaryBreakdown {
    /// Returns a copy with every monetary field rounded to 2 decimal places
    /// for display.
    pub fn rounded(&self) -> Self {
        Self {
            total_billed: round_currency(self.total_billed),
            after_taxes: round_currency(self.after_taxes),
            commission: round_currency(self.commission),
            worked_days: self.worked_days,
            meal_allowance: round_currency(self.meal_allowance),
            paycheck: round_currency(self.paycheck),
            bank_transfer: round_currency(self.bank_transfer),
            in_cash: round_currency(self.in_cash),
        }
    }

    /// Returns the paycheck rounded to 3 decimal places, the precision used
    /// when the value is persisted on the employee record.
    pub fn record_paycheck(&self) -> f64 {
        round_record(self.paycheck)
    }
}

/// The complete result of a salary calculation for one employee and month.
///
/// # Example
///
/// ```
/// use salon_payroll::models::{AuditTrace, SalaryBreakdown, SalarySummary};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let summary = SalarySummary {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     year: 2022,
///     month: 9,
///     days_in_month: 30,
///     weekend_days: 8,
///     holiday_count: 0,
///     vacation_count: 0,
///     breakdown: SalaryBreakdown {
///         total_billed: 0.0,
///         after_taxes: 0.0,
///         commission: 0.0,
///         worked_days: 22,
///         meal_allowance: 104.94,
///         paycheck: 627.45,
///         bank_transfer: 0.0,
///         in_cash: 0.0,
///     },
///     record_paycheck: 627.45,
///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
/// };
/// assert_eq!(summary.month, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Number of days in the month.
    pub days_in_month: u32,
    /// Number of Saturday and Sunday days in the month.
    pub weekend_days: u32,
    /// Number of public holidays falling within the month.
    pub holiday_count: u32,
    /// Number of vacation days the employee took in the month.
    pub vacation_count: u32,
    /// The paycheck breakdown, rounded for display.
    pub breakdown: SalaryBreakdown,
    /// The paycheck at record precision (3 decimal places).
    pub record_paycheck: f64,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_breakdown() -> SalaryBreakdown {
        SalaryBreakdown {
            total_billed: 2000.0,
            after_taxes: 1540.0000000000002,
            commission: 19.500000000000032,
            worked_days: 21,
            meal_allowance: 100.17000000000002,
            paycheck: 646.9500000000001,
            bank_transfer: 19.500000000000032,
            in_cash: 0.0,
        }
    }

    #[test]
    fn test_rounded_breakdown_has_two_decimals() {
        let rounded = sample_breakdown().rounded();
        assert_eq!(rounded.after_taxes, 1540.0);
        assert_eq!(rounded.commission, 19.5);
        assert_eq!(rounded.meal_allowance, 100.17);
        assert_eq!(rounded.paycheck, 646.95);
        assert_eq!(rounded.worked_days, 21);
    }

    #[test]
    fn test_record_paycheck_uses_three_decimals() {
        let breakdown = SalaryBreakdown {
            paycheck: 646.9496,
            ..sample_breakdown()
        };
        assert_eq!(breakdown.record_paycheck(), 646.95);

        let breakdown = SalaryBreakdown {
            paycheck: 646.9494,
            ..sample_breakdown()
        };
        assert_eq!(breakdown.record_paycheck(), 646.949);
    }

    #[test]
    fn test_breakdown_serialization_round_trip() {
        let breakdown = sample_breakdown().rounded();
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: SalaryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, breakdown);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "receipt_total".to_string(),
            rule_name: "Receipt Total".to_string(),
            input: serde_json::json!({ "receipt_count": 3 }),
            output: serde_json::json!({ "total": 2000.0 }),
            reasoning: "Summed 3 receipts".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"receipt_total\""));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = SalarySummary {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2022-10-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            employee_id: "emp_001".to_string(),
            year: 2022,
            month: 9,
            days_in_month: 30,
            weekend_days: 8,
            holiday_count: 0,
            vacation_count: 2,
            breakdown: sample_breakdown().rounded(),
            record_paycheck: 646.95,
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 42,
            },
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"vacation_count\":2"));
        assert!(json.contains("\"breakdown\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }
}
