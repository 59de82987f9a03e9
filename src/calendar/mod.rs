//! Calendar reconciliation logic.
//!
//! This module classifies each day of a month as holiday, weekend, vacation,
//! or workday, and provides the month arithmetic (days in month, weekend day
//! count, worked days) that feeds the payroll calculation.
//!
//! Two weekend conventions coexist on purpose. The day classification used
//! for calendar display runs a six-day work week: Monday through Saturday
//! are workable and only Sunday is structurally a weekend day. The worked-day
//! arithmetic used for the meal allowance counts both Saturday and Sunday as
//! weekend days. The source system carries both conventions and they must
//! not be reconciled.

mod day_class;
mod month;

pub use day_class::{DayClass, classify_day};
pub use month::{days_in_month, is_weekend, month_days, weekend_day_count, worked_days};
