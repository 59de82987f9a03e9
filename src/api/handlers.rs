//! HTTP request handlers for the salon payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_salary;
use crate::calendar::{days_in_month, weekend_day_count};
use crate::error::EngineError;
use crate::models::{
    AuditTrace, Employee, HolidayCalendar, PublicHoliday, Receipt, SalarySummary,
};

use super::request::SalaryRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", post(salary_handler))
        .route("/employees", get(employees_handler))
        .with_state(state)
}

/// Query parameters for the `/employees` endpoint.
#[derive(Debug, Deserialize)]
struct EmployeeListQuery {
    year: i32,
    month: u32,
    #[serde(default)]
    exclude_owner: bool,
}

/// Handler for GET /employees endpoint.
///
/// Lists the employees active during the requested month, optionally
/// excluding the owner.
async fn employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> impl IntoResponse {
    if let Err(err) = validate_month(query.month) {
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let employees: Vec<Employee> = state
        .config()
        .active_employees(query.year, query.month, query.exclude_owner)
        .into_iter()
        .cloned()
        .collect();

    info!(
        year = query.year,
        month = query.month,
        count = employees.len(),
        "Listed active employees"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(employees),
    )
        .into_response()
}

/// Handler for POST /salary endpoint.
///
/// Accepts a salary request and returns the calculated paycheck summary.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if let Err(err) = validate_month(request.month) {
        warn!(
            correlation_id = %correlation_id,
            month = request.month,
            "Invalid month"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    // Convert request types to domain types
    let policy = state.config().policy().clone();
    let employee = request.employee.resolve(&policy);

    if let Err(err) = validate_employee(&employee) {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            error = %err,
            "Invalid employee"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let receipts: Vec<Receipt> = request
        .receipts
        .into_iter()
        .filter(|r| r.date.year() == request.year && r.date.month() == request.month)
        .map(|r| r.into_receipt(&employee.id))
        .collect();

    let mut vacations: Vec<chrono::NaiveDate> = request
        .vacations
        .into_iter()
        .filter(|d| d.year() == request.year && d.month() == request.month)
        .collect();
    vacations.sort();
    vacations.dedup();
    let vacation_count = vacations.len() as u32;

    let holidays: Vec<PublicHoliday> = request.holidays.into_iter().map(Into::into).collect();
    let calendar = HolidayCalendar::from_holidays(holidays);
    let holiday_count = calendar.count_in_month(request.year, request.month);

    // Perform the calculation
    let start_time = Instant::now();
    let result = compute_salary(
        &employee,
        &receipts,
        vacation_count,
        holiday_count,
        request.year,
        request.month,
        policy.meal_allowance_per_day,
    );
    let duration_us = start_time.elapsed().as_micros() as u64;

    let summary = SalarySummary {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        year: request.year,
        month: request.month,
        days_in_month: days_in_month(request.year, request.month),
        weekend_days: weekend_day_count(request.year, request.month),
        holiday_count,
        vacation_count,
        breakdown: result.breakdown.rounded(),
        record_paycheck: result.breakdown.record_paycheck(),
        audit_trace: AuditTrace {
            steps: result.audit_steps,
            duration_us,
        },
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        receipt_count = receipts.len(),
        paycheck = summary.breakdown.paycheck,
        duration_us,
        "Salary calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Validates that a month number is in range.
fn validate_month(month: u32) -> Result<(), EngineError> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidPeriod {
            message: format!("month must be between 1 and 12, got {}", month),
        });
    }
    Ok(())
}

/// Validates the fractional fields of a request employee.
fn validate_employee(employee: &Employee) -> Result<(), EngineError> {
    for (field, value) in [
        ("commission_percent", employee.commission_percent),
        ("tax", employee.tax),
        ("taxed_percent", employee.taxed_percent),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(EngineError::InvalidEmployee {
                field: field.to_string(),
                message: format!("must be a fraction between 0 and 1, got {}", value),
            });
        }
    }
    if employee.base_salary < 0.0 {
        return Err(EngineError::InvalidEmployee {
            field: "base_salary".to_string(),
            message: format!("must not be negative, got {}", employee.base_salary),
        });
    }
    Ok(())
}
