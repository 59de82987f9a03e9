//! Configuration loading and types.
//!
//! This module handles loading the salon configuration from YAML files:
//! the salon metadata, the payroll policy defaults, and the employee
//! roster.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeeSeed, PayrollPolicy, RosterConfig, SalonConfig, SalonMetadata};
