//! Day classification for the month calendar.
//!
//! Classifies a single calendar day into exactly one of holiday, weekend,
//! vacation, or workday for a given employee. Classification runs the
//! six-day work week: Saturday is workable unless a holiday falls on it,
//! and only Sunday is a structural weekend day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayCalendar;

/// The classification of one calendar day for one employee.
///
/// # Example
///
/// ```
/// use salon_payroll::calendar::DayClass;
///
/// let day = DayClass::Holiday { local_name: "Natal".to_string() };
/// assert_eq!(format!("{}", day), "Natal");
/// assert_eq!(format!("{}", DayClass::Workday), "Workday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayClass {
    /// A public holiday, carrying the localized holiday name.
    Holiday {
        /// The holiday name in the country's language.
        local_name: String,
    },
    /// A structural weekend day (Sunday).
    Weekend,
    /// A workable day on which the employee is on vacation.
    Vacation,
    /// A plain workday.
    Workday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Holiday { local_name } => write!(f, "{local_name}"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Vacation => write!(f, "Vacation"),
            DayClass::Workday => write!(f, "Workday"),
        }
    }
}

/// Classifies a single day for one employee, first match wins.
///
/// Precedence:
/// 1. A holiday entry for the date makes it a [`DayClass::Holiday`],
///    regardless of weekday.
/// 2. Sunday is a [`DayClass::Weekend`] day.
/// 3. Any other day (Monday through Saturday) is workable and becomes a
///    [`DayClass::Vacation`] when the employee has a vacation row for the
///    date, otherwise a [`DayClass::Workday`].
///
/// # Arguments
///
/// * `date` - The day to classify
/// * `holidays` - The holiday calendar for the date's year
/// * `is_on_vacation` - Vacation lookup for the employee in question
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use salon_payroll::calendar::{classify_day, DayClass};
/// use salon_payroll::models::HolidayCalendar;
///
/// let holidays = HolidayCalendar::from_api(2022, "PT", vec![]);
/// // 2022-09-10 is a Saturday: workable under the six-day week.
/// let saturday = NaiveDate::from_ymd_opt(2022, 9, 10).unwrap();
/// assert_eq!(classify_day(saturday, &holidays, |_| false), DayClass::Workday);
/// ```
pub fn classify_day<F>(date: NaiveDate, holidays: &HolidayCalendar, is_on_vacation: F) -> DayClass
where
    F: Fn(NaiveDate) -> bool,
{
    if let Some(holiday) = holidays.lookup(date) {
        return DayClass::Holiday {
            local_name: holiday.local_name.clone(),
        };
    }

    if date.weekday() == Weekday::Sun {
        return DayClass::Weekend;
    }

    if is_on_vacation(date) {
        DayClass::Vacation
    } else {
        DayClass::Workday
    }
}
