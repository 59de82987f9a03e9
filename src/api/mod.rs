//! HTTP API module for the salon payroll engine.
//!
//! This module provides the REST API endpoints for calculating monthly
//! paychecks and listing the active roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, HolidayRequest, ReceiptRequest, SalaryRequest};
pub use response::ApiError;
pub use state::AppState;
