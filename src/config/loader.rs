//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salon
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{PayrollPolicy, RosterConfig, SalonConfig, SalonMetadata};

/// Loads and provides access to the salon configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the roster and policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/salon/
/// ├── salon.yaml      # Salon metadata
/// ├── policy.yaml     # Payroll policy defaults
/// └── employees.yaml  # Employee roster
/// ```
///
/// # Example
///
/// ```no_run
/// use salon_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salon").unwrap();
///
/// let employee = loader.get_employee_by_name("Carla").unwrap();
/// println!("Base salary: {}", employee.base_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SalonConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/salon")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let salon_path = path.join("salon.yaml");
        let salon = Self::load_yaml::<SalonMetadata>(&salon_path)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;

        let roster_path = path.join("employees.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;

        let employees: Vec<Employee> = roster
            .employees
            .into_iter()
            .map(|seed| seed.resolve(&policy))
            .collect();

        Self::validate_roster(&employees)?;

        Ok(Self {
            config: SalonConfig::new(salon, policy, employees),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the resolved roster.
    ///
    /// Fractional fields must lie in 0..=1 and identifiers must be unique.
    fn validate_roster(employees: &[Employee]) -> EngineResult<()> {
        let mut seen_ids: Vec<&str> = Vec::new();

        for employee in employees {
            for (field, value) in [
                ("commission_percent", employee.commission_percent),
                ("tax", employee.tax),
                ("taxed_percent", employee.taxed_percent),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(EngineError::InvalidEmployee {
                        field: field.to_string(),
                        message: format!(
                            "must be a fraction between 0 and 1, got {} for '{}'",
                            value, employee.name
                        ),
                    });
                }
            }

            if employee.base_salary < 0.0 {
                return Err(EngineError::InvalidEmployee {
                    field: "base_salary".to_string(),
                    message: format!("must not be negative, got {} for '{}'", employee.base_salary, employee.name),
                });
            }

            if seen_ids.contains(&employee.id.as_str()) {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: format!("duplicate identifier '{}'", employee.id),
                });
            }
            seen_ids.push(&employee.id);
        }

        Ok(())
    }

    /// Returns the underlying salon configuration.
    pub fn config(&self) -> &SalonConfig {
        &self.config
    }

    /// Returns the salon metadata.
    pub fn salon(&self) -> &SalonMetadata {
        self.config.salon()
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }

    /// Returns the full employee roster.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee by identifier.
    ///
    /// # Returns
    ///
    /// Returns the employee if found, or `EmployeeNotFound`.
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Gets an employee by display name.
    pub fn get_employee_by_name(&self, name: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: name.to_string(),
            })
    }

    /// Returns the employees active during the given month.
    ///
    /// The owner is excluded when `exclude_owner` is set; payroll views list
    /// staff only.
    pub fn active_employees(
        &self,
        year: i32,
        month: u32,
        exclude_owner: bool,
    ) -> Vec<&Employee> {
        self.config
            .employees()
            .iter()
            .filter(|e| e.is_active_in(year, month))
            .filter(|e| !(exclude_owner && e.is_owner()))
            .collect()
    }
}
