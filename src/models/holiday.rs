//! Public holiday models and calendar construction.
//!
//! Holidays are read-only external facts fetched per year and country from
//! the nager.at public holiday API. The raw payload is filtered to global
//! holidays, one fixed local addition is appended for Portugal, and the
//! result is sorted ascending by date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Local name of the fixed Portuguese addition appended for country "PT".
pub const ST_ANTHONY_LOCAL_NAME: &str = "Dia de Santo António";

/// A public holiday entry as served by the nager.at API.
///
/// Only the fields the engine consumes are modelled; the payload carries
/// more (country code, counties, launch year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NagerHoliday {
    /// The holiday date as an ISO `YYYY-MM-DD` string.
    pub date: String,
    /// The holiday name in the country's language.
    pub local_name: String,
    /// The holiday name in English.
    pub name: String,
    /// Whether the holiday applies country-wide.
    pub global: bool,
}

/// A public holiday within a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The holiday name in the country's language (e.g., "Natal").
    pub local_name: String,
    /// The holiday name in English (e.g., "Christmas Day").
    pub name: String,
    /// Whether the holiday applies country-wide.
    pub global: bool,
}

/// The public holidays of one year for one country, sorted by date.
///
/// # Example
///
/// ```
/// use salon_payroll::models::{HolidayCalendar, NagerHoliday};
///
/// let api = vec![NagerHoliday {
///     date: "2022-12-25".to_string(),
///     local_name: "Natal".to_string(),
///     name: "Christmas Day".to_string(),
///     global: true,
/// }];
///
/// let calendar = HolidayCalendar::from_api(2022, "PT", api);
/// // The fixed St. Anthony's Day addition comes first by date.
/// assert_eq!(calendar.holidays().len(), 2);
/// assert_eq!(calendar.count_in_month(2022, 12), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Builds a holiday calendar from a raw nager.at payload.
    ///
    /// Entries that are not country-wide (`global == false`) are discarded.
    /// For country code "PT" the fixed non-global June 13 entry
    /// ("Dia de Santo António" / "St. Anthony's Day") is appended, then the
    /// whole list is sorted ascending by date. Entries whose date string
    /// does not parse are dropped.
    pub fn from_api(year: i32, country_code: &str, api_holidays: Vec<NagerHoliday>) -> Self {
        let mut raw: Vec<NagerHoliday> =
            api_holidays.into_iter().filter(|h| h.global).collect();

        if country_code == "PT" {
            raw.push(NagerHoliday {
                date: format!("{year}-06-13"),
                local_name: ST_ANTHONY_LOCAL_NAME.to_string(),
                name: "St. Anthony's Day".to_string(),
                global: false,
            });
        }

        let mut holidays: Vec<PublicHoliday> = raw
            .into_iter()
            .filter_map(|h| {
                let date = NaiveDate::parse_from_str(&h.date, "%Y-%m-%d").ok()?;
                Some(PublicHoliday {
                    date,
                    local_name: h.local_name,
                    name: h.name,
                    global: h.global,
                })
            })
            .collect();

        holidays.sort_by_key(|h| h.date);
        Self { holidays }
    }

    /// Builds a calendar directly from already-normalized holidays.
    pub fn from_holidays(mut holidays: Vec<PublicHoliday>) -> Self {
        holidays.sort_by_key(|h| h.date);
        Self { holidays }
    }

    /// Returns the holidays in ascending date order.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Looks up the holiday entry for a date, if any.
    pub fn lookup(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Returns true if the date has a holiday entry.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.lookup(date).is_some()
    }

    /// Counts the holiday entries falling within the given month.
    pub fn count_in_month(&self, year: i32, month: u32) -> u32 {
        self.holidays
            .iter()
            .filter(|h| h.date.year() == year && h.date.month() == month)
            .count() as u32
    }
}
