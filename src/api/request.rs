//! Request types for the salon payroll API.
//!
//! This module defines the JSON request structures for the `/salary`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{EmployeeSeed, PayrollPolicy};
use crate::models::{Employee, EmployeeTitle, PublicHoliday, Receipt};

/// Request body for the `/salary` endpoint.
///
/// Contains all information needed to calculate one employee's paycheck for
/// a month: the employee, the period, the month's receipts, the employee's
/// vacation days, and the public holidays of the year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// The receipts billed by the employee.
    #[serde(default)]
    pub receipts: Vec<ReceiptRequest>,
    /// The dates the employee was on vacation.
    #[serde(default)]
    pub vacations: Vec<NaiveDate>,
    /// The public holidays applying to the salon.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// Employee information in a salary request.
///
/// Tax fields are optional and fall back to the payroll policy defaults,
/// mirroring the roster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
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
    #[serde(default = "default_hire_date")]
    pub hire_date: NaiveDate,
    /// The date the employee left, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

fn default_hire_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

impl EmployeeRequest {
    /// Resolves this request into an [`Employee`], filling policy defaults.
    pub fn resolve(self, policy: &PayrollPolicy) -> Employee {
        EmployeeSeed {
            id: self.id,
            name: self.name,
            title: self.title,
            base_salary: self.base_salary,
            commission_percent: self.commission_percent,
            threshold_for_commission: self.threshold_for_commission,
            tax: self.tax,
            taxed_percent: self.taxed_percent,
            hire_date: self.hire_date,
            termination_date: self.termination_date,
        }
        .resolve(policy)
    }
}

/// Receipt information in a salary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    /// The date the amount was billed.
    pub date: NaiveDate,
    /// The billed amount.
    pub amount: f64,
}

impl ReceiptRequest {
    /// Converts this request into a [`Receipt`] for the given employee.
    pub fn into_receipt(self, employee_id: &str) -> Receipt {
        Receipt {
            employee_id: employee_id.to_string(),
            date: self.date,
            amount: self.amount,
        }
    }
}

/// Public holiday information in a salary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The holiday name in the country's language.
    pub local_name: String,
    /// The holiday name in English.
    #[serde(default)]
    pub name: String,
    /// Whether the holiday applies countrywide.
    #[serde(default = "default_global")]
    pub global: bool,
}

fn default_global() -> bool {
    true
}

impl From<HolidayRequest> for PublicHoliday {
    fn from(req: HolidayRequest) -> Self {
        PublicHoliday {
            date: req.date,
            local_name: req.local_name,
            name: req.name,
            global: req.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_salary_request() {
        let json = r#"{
            "employee": {
                "name": "Carla",
                "title": "hairdresser",
                "base_salary": 627.45,
                "commission_percent": 0.15,
                "threshold_for_commission": 1410.0
            },
            "year": 2022,
            "month": 9,
            "receipts": [
                { "date": "2022-09-05", "amount": 1200.0 },
                { "date": "2022-09-20", "amount": 800.0 }
            ],
            "vacations": ["2022-09-12"],
            "holidays": []
        }"#;

        let request: SalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.name, "Carla");
        assert_eq!(request.year, 2022);
        assert_eq!(request.month, 9);
        assert_eq!(request.receipts.len(), 2);
        assert_eq!(request.vacations.len(), 1);
        assert!(request.employee.tax.is_none());
    }

    #[test]
    fn test_employee_resolution_fills_defaults() {
        let request = EmployeeRequest {
            id: None,
            name: "Sara".to_string(),
            title: EmployeeTitle::Beautician,
            base_salary: 627.45,
            commission_percent: 0.8,
            threshold_for_commission: 0.0,
            tax: None,
            taxed_percent: None,
            hire_date: default_hire_date(),
            termination_date: None,
        };

        let employee = request.resolve(&PayrollPolicy::default());
        assert_eq!(employee.tax, 0.23);
        assert_eq!(employee.taxed_percent, 1.0);
        assert_eq!(employee.id, Employee::stable_id("Sara"));
    }

    #[test]
    fn test_receipt_conversion_carries_employee_id() {
        let req = ReceiptRequest {
            date: NaiveDate::from_ymd_opt(2022, 9, 5).unwrap(),
            amount: 120.0,
        };

        let receipt = req.into_receipt("emp_001");
        assert_eq!(receipt.employee_id, "emp_001");
        assert_eq!(receipt.amount, 120.0);
    }

    #[test]
    fn test_holiday_request_defaults_to_global() {
        let json = r#"{ "date": "2022-12-25", "local_name": "Natal" }"#;
        let holiday: HolidayRequest = serde_json::from_str(json).unwrap();
        assert!(holiday.global);
        assert_eq!(holiday.name, "");

        let public: PublicHoliday = holiday.into();
        assert_eq!(public.local_name, "Natal");
    }
}
