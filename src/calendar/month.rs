//! Month arithmetic for worked-day counting.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the number of days in the given month.
///
/// Months outside 1-12 are the caller's responsibility; the engine assumes
/// validated input.
///
/// # Example
///
/// ```
/// use salon_payroll::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2022, 9), 30);
/// assert_eq!(days_in_month(2022, 2), 28);
/// assert_eq!(days_in_month(2020, 2), 29);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Iterates over every date of the given month in order.
pub fn month_days(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    (1..=days_in_month(year, month)).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
}

/// Returns true if the date falls on a Saturday or a Sunday.
///
/// This is the payroll weekend predicate used for worked-day counting. It
/// deliberately differs from the calendar classification, where Saturday is
/// a workable day (see [`super::classify_day`]).
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the Saturday and Sunday days in the given month.
///
/// # Example
///
/// ```
/// use salon_payroll::calendar::weekend_day_count;
///
/// // September 2022 has 4 Saturdays and 4 Sundays.
/// assert_eq!(weekend_day_count(2022, 9), 8);
/// ```
pub fn weekend_day_count(year: i32, month: u32) -> u32 {
    month_days(year, month).filter(|d| is_weekend(*d)).count() as u32
}

/// Computes the number of worked days in a month.
///
/// `worked_days = days_in_month - weekend_days - holiday_count -
/// vacation_count`, floored at zero. A month where vacations and holidays
/// exceed the available workdays yields zero, never a negative count.
pub fn worked_days(
    days_in_month: u32,
    weekend_days: u32,
    holiday_count: u32,
    vacation_count: u32,
) -> u32 {
    (days_in_month as i64 - weekend_days as i64 - holiday_count as i64 - vacation_count as i64)
        .max(0) as u32
}
