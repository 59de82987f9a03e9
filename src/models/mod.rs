//! Core data models for the salon payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod receipt;
mod summary;

pub use employee::{Employee, EmployeeTitle};
pub use holiday::{HolidayCalendar, NagerHoliday, PublicHoliday, ST_ANTHONY_LOCAL_NAME};
pub use receipt::{Receipt, Vacation};
pub use summary::{AuditStep, AuditTrace, SalaryBreakdown, SalarySummary};
