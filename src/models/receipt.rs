//! Receipt and vacation models.
//!
//! A receipt records the amount one employee billed on one calendar day; a
//! vacation row marks one employee as absent on one day. Both are keyed by
//! `(employee_id, date)` with upsert semantics in the surrounding store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single employee's billed amount for one calendar day.
///
/// At most one receipt exists per `(employee_id, date)`. The amount is
/// conceptually non-negative but not enforced here; malformed upstream data
/// simply flows through the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// The employee who billed the amount.
    pub employee_id: String,
    /// The day the amount was billed.
    pub date: NaiveDate,
    /// The billed amount, in currency units.
    pub amount: f64,
}

/// A vacation day for one employee.
///
/// The presence of a row means the employee is on vacation that day;
/// deleting the row clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacation {
    /// Unique identifier of the vacation row.
    pub id: String,
    /// The employee on vacation.
    pub employee_id: String,
    /// The vacation day.
    pub date: NaiveDate,
}
