//! Configuration type definitions.
//!
//! This module defines the structures deserialized from the salon's YAML
//! configuration files: the salon metadata, the payroll policy, and the
//! employee roster.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_MEAL_ALLOWANCE_PER_DAY;
use crate::models::{Employee, EmployeeTitle};

/// Salon metadata from salon.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonMetadata {
    /// The salon's display name.
    pub name: String,
    /// ISO 3166-1 alpha-2 country code, used for holiday lookups.
    pub country_code: String,
    /// ISO 4217 currency code for all monetary values.
    pub currency: String,
}

/// Payroll policy defaults from policy.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// The meal allowance paid per worked day.
    #[serde(default = "default_meal_allowance")]
    pub meal_allowance_per_day: f64,
    /// The tax rate applied when an employee does not set one.
    #[serde(default = "default_tax")]
    pub default_tax: f64,
    /// The taxed fraction applied when an employee does not set one.
    #[serde(default = "default_taxed_percent")]
    pub default_taxed_percent: f64,
}

fn default_meal_allowance() -> f64 {
    DEFAULT_MEAL_ALLOWANCE_PER_DAY
}

fn default_tax() -> f64 {
    0.23
}

fn default_taxed_percent() -> f64 {
    1.0
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            meal_allowance_per_day: default_meal_allowance(),
            default_tax: default_tax(),
            default_taxed_percent: default_taxed_percent(),
        }
    }
}

/// One employee entry in employees.yaml.
///
/// Tax fields are optional and fall back to the payroll policy defaults;
/// the identifier is derived from the name when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSeed {
    /// Explicit identifier; derived from the name when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// The employee's display name.
    pub name: String,
    /// The employee's job title.
    pub title: EmployeeTitle,
    /// The guaranteed monthly base salary.
    #[serde(default)]
    pub base_salary: f64,
    /// Commission fraction applied above the threshold.
    #[serde(default)]
    pub commission_percent: f64,
    /// After-tax billed amount below which no commission is paid.
    #[serde(default)]
    pub threshold_for_commission: f64,
    /// The tax fraction, policy default when omitted.
    #[serde(default)]
    pub tax: Option<f64>,
    /// The taxed fraction of the billed total, policy default when omitted.
    #[serde(default)]
    pub taxed_percent: Option<f64>,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date the employee left, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

impl EmployeeSeed {
    /// Resolves this seed into an [`Employee`], filling policy defaults.
    pub fn resolve(self, policy: &PayrollPolicy) -> Employee {
        let id = self
            .id
            .unwrap_or_else(|| Employee::stable_id(&self.name));

        Employee {
            id,
            name: self.name,
            title: self.title,
            base_salary: self.base_salary,
            commission_percent: self.commission_percent,
            threshold_for_commission: self.threshold_for_commission,
            tax: self.tax.unwrap_or(policy.default_tax),
            taxed_percent: self.taxed_percent.unwrap_or(policy.default_taxed_percent),
            hire_date: self.hire_date,
            termination_date: self.termination_date,
        }
    }
}

/// The top-level structure of employees.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// The employee seed entries.
    pub employees: Vec<EmployeeSeed>,
}

/// The complete salon configuration.
#[derive(Debug, Clone)]
pub struct SalonConfig {
    salon: SalonMetadata,
    policy: PayrollPolicy,
    employees: Vec<Employee>,
}

impl SalonConfig {
    /// Creates a new salon configuration from its parts.
    pub fn new(salon: SalonMetadata, policy: PayrollPolicy, employees: Vec<Employee>) -> Self {
        Self {
            salon,
            policy,
            employees,
        }
    }

    /// Returns the salon metadata.
    pub fn salon(&self) -> &SalonMetadata {
        &self.salon
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns the resolved employee roster.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
