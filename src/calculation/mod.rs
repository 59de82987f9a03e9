//! Payroll calculation logic.
//!
//! This module contains the calculation steps for one employee's monthly
//! paycheck: receipt totalling, the two-rate tax split, commission above the
//! threshold, meal allowance over worked days, the bank-transfer/cash payout
//! split, the rounding rules, and the [`compute_salary`] orchestrator tying
//! them together.
//!
//! All arithmetic is plain IEEE-754 `f64`, matching the source system
//! exactly; values are rounded only at the display and record steps.

mod commission;
mod meal_allowance;
mod payout_split;
mod receipt_total;
mod rounding;
mod salary;
mod tax;

pub use commission::{CommissionResult, calculate_commission};
pub use meal_allowance::{
    DEFAULT_MEAL_ALLOWANCE_PER_DAY, MealAllowanceResult, calculate_meal_allowance,
};
pub use payout_split::{PayoutSplitResult, calculate_payout_split};
pub use receipt_total::{ReceiptTotalResult, calculate_receipt_total};
pub use rounding::{round_currency, round_record, round_to};
pub use salary::{SalaryCalculation, compute_salary};
pub use tax::{AfterTaxResult, TaxPolicy, apply_tax_policy};
