//! Holiday calendar.
//!
//! Two holidays are observed: Independence Day, shifted to the nearest
//! weekday when July 4 falls on a weekend, and Labor Day, the first Monday
//! of September.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// An observed holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4, or its observed weekday.
    IndependenceDay,
    /// First Monday of September.
    LaborDay,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Returns the holiday observed on `date`, if any.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{holiday_on, Holiday};
/// use chrono::NaiveDate;
///
/// let labor_day = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// assert_eq!(holiday_on(labor_day), Some(Holiday::LaborDay));
///
/// let ordinary = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
/// assert_eq!(holiday_on(ordinary), None);
/// ```
pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    if is_independence_day(date) {
        Some(Holiday::IndependenceDay)
    } else if is_labor_day(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

/// Returns true if `date` is an observed holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_on(date).is_some()
}

/// Returns true if `date` is July 4 or the weekday July 4 is observed on.
///
/// When July 4 falls on a Saturday the preceding Friday is observed; on a
/// Sunday, the following Monday. July 4 itself stays a holiday either way.
pub fn is_independence_day(date: NaiveDate) -> bool {
    if date.month() == Month::July.number_from_month() && date.day() == 4 {
        return true;
    }
    observed_independence_day(date.year()) == Some(date)
}

/// Returns the weekday on which Independence Day is observed in `year`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::observed_independence_day;
/// use chrono::NaiveDate;
///
/// // July 4, 2026 is a Saturday
/// assert_eq!(
///     observed_independence_day(2026),
///     NaiveDate::from_ymd_opt(2026, 7, 3)
/// );
/// ```
pub fn observed_independence_day(year: i32) -> Option<NaiveDate> {
    let july_4 = NaiveDate::from_ymd_opt(year, Month::July.number_from_month(), 4)?;
    match july_4.weekday() {
        Weekday::Sat => july_4.pred_opt(),
        Weekday::Sun => july_4.succ_opt(),
        _ => Some(july_4),
    }
}

/// Returns true if `date` is a Monday within the first seven days of
/// September.
pub fn is_labor_day(date: NaiveDate) -> bool {
    date.month() == Month::September.number_from_month()
        && date.weekday() == Weekday::Mon
        && date.day() <= 7
}

/// Returns Labor Day for `year`.
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, Month::September.number_from_month(), Weekday::Mon, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_july_4_weekday_is_holiday() {
        // 2024-07-04 is a Thursday
        assert!(is_holiday(make_date("2024-07-04")));
        assert!(!is_holiday(make_date("2024-07-03")));
        assert!(!is_holiday(make_date("2024-07-05")));
    }

    #[test]
    fn test_july_4_saturday_observed_friday() {
        // 2026-07-04 is a Saturday
        assert_eq!(holiday_on(make_date("2026-07-03")), Some(Holiday::IndependenceDay));
        assert_eq!(holiday_on(make_date("2026-07-04")), Some(Holiday::IndependenceDay));
        assert!(!is_holiday(make_date("2026-07-05")));
        assert!(!is_holiday(make_date("2026-07-06")));
    }

    #[test]
    fn test_july_4_sunday_observed_monday() {
        // 2021-07-04 is a Sunday
        assert!(is_independence_day(make_date("2021-07-04")));
        assert!(is_independence_day(make_date("2021-07-05")));
        assert!(!is_independence_day(make_date("2021-07-02")));
        assert!(!is_independence_day(make_date("2021-07-03")));
    }

    #[test]
    fn test_observed_independence_day() {
        assert_eq!(observed_independence_day(2024), Some(make_date("2024-07-04")));
        assert_eq!(observed_independence_day(2026), Some(make_date("2026-07-03")));
        assert_eq!(observed_independence_day(2021), Some(make_date("2021-07-05")));
    }

    #[test]
    fn test_other_months_fourth_not_holiday() {
        assert!(!is_holiday(make_date("2024-06-04")));
        assert!(!is_holiday(make_date("2024-08-04")));
        assert!(!is_holiday(make_date("2026-06-03")));
    }

    #[test]
    fn test_labor_day_first_monday_of_september() {
        assert_eq!(holiday_on(make_date("2024-09-02")), Some(Holiday::LaborDay));
        assert_eq!(holiday_on(make_date("2025-09-01")), Some(Holiday::LaborDay));
        assert_eq!(holiday_on(make_date("2026-09-07")), Some(Holiday::LaborDay));
    }

    #[test]
    fn test_second_monday_of_september_not_holiday() {
        assert!(!is_labor_day(make_date("2024-09-09")));
        assert!(!is_labor_day(make_date("2025-09-08")));
    }

    #[test]
    fn test_monday_in_first_week_of_other_month_not_labor_day() {
        // 2024-08-05 and 2024-10-07 are Mondays
        assert!(!is_labor_day(make_date("2024-08-05")));
        assert!(!is_labor_day(make_date("2024-10-07")));
    }

    #[test]
    fn test_labor_day_lookup() {
        assert_eq!(labor_day(2024), Some(make_date("2024-09-02")));
        assert_eq!(labor_day(2025), Some(make_date("2025-09-01")));
        assert_eq!(labor_day(2026), Some(make_date("2026-09-07")));
    }

    #[test]
    fn test_labor_day_lookup_agrees_with_predicate() {
        for year in 2000..2040 {
            let day = labor_day(year).unwrap();
            assert!(is_labor_day(day), "{day}");
            assert!(!is_labor_day(day + chrono::Duration::days(7)), "{day}");
        }
    }

    #[test]
    fn test_exactly_one_observed_independence_weekday_per_year() {
        for year in 2000..2040 {
            let observed = observed_independence_day(year).unwrap();
            assert!(is_independence_day(observed));
            assert!(!matches!(observed.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }

    #[test]
    fn test_holiday_display() {
        assert_eq!(Holiday::IndependenceDay.to_string(), "Independence Day");
        assert_eq!(Holiday::LaborDay.to_string(), "Labor Day");
    }

    #[test]
    fn test_holiday_serialization() {
        let json = serde_json::to_string(&Holiday::LaborDay).unwrap();
        assert_eq!(json, "\"labor_day\"");
    }
}
