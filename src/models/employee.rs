//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and [`EmployeeTitle`] enum
//! for representing workers in the salon payroll system.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::TaxPolicy;
use crate::calendar::days_in_month;

/// Represents an employee's job title in the salon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeTitle {
    /// The salon owner. Excluded from most payroll views.
    Owner,
    /// Hairdressing staff.
    Hairdresser,
    /// Barbering staff.
    Barber,
    /// Manicure staff.
    Manicurist,
    /// Beauty treatment staff.
    Beautician,
}

/// Represents an employee subject to payroll calculation.
///
/// The tax fields follow the two-rate model: `taxed_percent` is the fraction
/// of the billed total that is subject to `tax`, the remainder is untaxed.
/// A fully-taxed employee has `taxed_percent = 1.0`, which reduces the model
/// to a flat rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's job title.
    pub title: EmployeeTitle,
    /// The guaranteed monthly base salary, in currency units.
    pub base_salary: f64,
    /// Commission fraction (0..1) applied above the threshold.
    pub commission_percent: f64,
    /// After-tax billed amount below which no commission is paid.
    #[serde(default)]
    pub threshold_for_commission: f64,
    /// The tax fraction applied to the taxed share of the billed total.
    pub tax: f64,
    /// The fraction of the billed total that is subject to tax.
    pub taxed_percent: f64,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date the employee left, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

impl Employee {
    /// Derives a stable identifier from an employee name.
    ///
    /// The identifier is a name-based (v5) UUID, so the same name always
    /// produces the same id. The original system derived ids by hashing the
    /// employee name; opaque generated ids work equally well anywhere an id
    /// is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use salon_payroll::models::Employee;
    ///
    /// let a = Employee::stable_id("Carla");
    /// let b = Employee::stable_id("Carla");
    /// assert_eq!(a, b);
    /// assert_ne!(a, Employee::stable_id("Pedro"));
    /// ```
    pub fn stable_id(name: &str) -> String {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
    }

    /// Returns true if the employee is the salon owner.
    pub fn is_owner(&self) -> bool {
        self.title == EmployeeTitle::Owner
    }

    /// Returns true if the employee is active during the given month.
    ///
    /// An employee is active when their hire date is on or before the last
    /// day of the month and their termination date, if set, is on or after
    /// the first day of the month.
    pub fn is_active_in(&self, year: i32, month: u32) -> bool {
        let first_day = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => d,
            None => return false,
        };
        let last_day = match NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)) {
            Some(d) => d,
            None => return false,
        };

        self.hire_date <= last_day
            && self
                .termination_date
                .is_none_or(|terminated| terminated >= first_day)
    }

    /// Returns the employee's tax policy pair.
    pub fn tax_policy(&self) -> TaxPolicy {
        TaxPolicy {
            tax: self.tax,
            taxed_percent: self.taxed_percent,
        }
    }

    /// Returns true if the given date falls within the employee's tenure.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.is_active_in(date.year(), date.month())
    }
}
