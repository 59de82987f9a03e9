//! Currency rounding.
//!
//! Rounds half up by nudging the value with machine epsilon before scaling,
//! the same scheme the source system uses for every displayed amount.

/// Rounds a value to the given number of decimal places.
///
/// # Example
///
/// ```
/// use salon_payroll::calculation::round_to;
///
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(646.9494, 3), 646.949);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    let p = 10f64.powi(digits as i32);
    ((value + f64::EPSILON) * p).round() / p
}

/// Rounds a currency value to 2 decimal places for display.
pub fn round_currency(value: f64) -> f64 {
    round_to(value, 2)
}

/// Rounds a paycheck to 3 decimal places, the precision used when the value
/// is persisted on the employee record.
pub fn round_record(value: f64) -> f64 {
    round_to(value, 3)
}
