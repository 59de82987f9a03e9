//! Payroll engine for a salon back office.
//!
//! This crate computes an employee's monthly paycheck breakdown (billed total,
//! after-tax amount, commission, worked days, meal allowance, and the
//! bank-transfer/cash split) from the month's receipt, vacation, and public
//! holiday facts, and reconciles the calendar to classify each day of the
//! month as a holiday, weekend, vacation, or workday.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
