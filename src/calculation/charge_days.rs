//! Charge day calculation.
//!
//! Walks the rental window one calendar day at a time and decides which
//! days are billable under a tool's [`ToolPolicy`].

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutResult, RentalError};
use crate::models::ToolPolicy;

use super::day_detection::{DayType, get_day_type};
use super::holiday::{Holiday, holiday_on};

/// One day of a rental window and whether it is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Weekday, Saturday or Sunday.
    pub day_type: DayType,
    /// The holiday observed on this date, if any.
    pub holiday: Option<Holiday>,
    /// Whether the day is billed.
    pub chargeable: bool,
}

/// The outcome of walking a rental window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeDaysResult {
    /// The checkout date plus the rental day count.
    pub due_date: NaiveDate,
    /// How many days of the window are billed.
    pub charge_days: u32,
    /// Every day after checkout up to and including the due date.
    pub days: Vec<RentalDay>,
}

/// Returns true if `date` is billed under `policy`.
///
/// A weekend day is billed only if the policy charges weekends, and a
/// holiday only if the policy charges holidays. `weekday_charge` never
/// excludes a day.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_chargeable_day;
/// use tool_rental::models::ToolType;
/// use chrono::NaiveDate;
///
/// let july_4 = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert!(is_chargeable_day(july_4, &ToolType::Chainsaw.policy()));
/// assert!(!is_chargeable_day(july_4, &ToolType::Ladder.policy()));
/// ```
pub fn is_chargeable_day(date: NaiveDate, policy: &ToolPolicy) -> bool {
    classify_day(date, policy).chargeable
}

fn classify_day(date: NaiveDate, policy: &ToolPolicy) -> RentalDay {
    let day_type = get_day_type(date);
    let holiday = holiday_on(date);

    let mut chargeable = true;
    if day_type.is_weekend() && !policy.weekend_charge {
        chargeable = false;
    }
    if holiday.is_some() && !policy.holiday_charge {
        chargeable = false;
    }

    RentalDay {
        date,
        day_type,
        holiday,
        chargeable,
    }
}

/// Computes the due date and billable day count of a rental.
///
/// Counting starts the day after checkout. The due date always lands
/// exactly `rental_days` calendar days after checkout, whatever the
/// chargeability of the days in between.
///
/// # Errors
///
/// Returns [`RentalError::DateOutOfRange`] if the due date would fall past
/// the last date chrono can represent.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::compute_charge_days;
/// use tool_rental::models::ToolType;
/// use chrono::NaiveDate;
///
/// // Wed 4, Thu 5, Fri 6, Sat 7, Sun 8, Mon 9 September 2024
/// let checkout = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
/// let result = compute_charge_days(checkout, 6, &ToolType::Jackhammer.policy()).unwrap();
///
/// assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 9, 9).unwrap());
/// assert_eq!(result.charge_days, 4);
/// ```
pub fn compute_charge_days(
    checkout_date: NaiveDate,
    rental_days: u32,
    policy: &ToolPolicy,
) -> CheckoutResult<ChargeDaysResult> {
    let due_date = checkout_date
        .checked_add_days(Days::new(u64::from(rental_days)))
        .ok_or(RentalError::DateOutOfRange {
            date: checkout_date,
            days: i64::from(rental_days),
        })?;

    let days: Vec<RentalDay> = checkout_date
        .iter_days()
        .skip(1)
        .take(rental_days as usize)
        .map(|date| classify_day(date, policy))
        .collect();

    let charge_days = days.iter().filter(|day| day.chargeable).count() as u32;

    Ok(ChargeDaysResult {
        due_date,
        charge_days,
        days,
    })
}
