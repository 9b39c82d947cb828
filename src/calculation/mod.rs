//! Calculation logic for the tool rental engine.
//!
//! This module contains the holiday calendar, day detection for weekend
//! policies, the charge day walk over a rental window, and the pricing of
//! billable days with discount rounding.

mod charge_days;
mod day_detection;
mod holiday;
mod pricing;

pub use charge_days::{ChargeDaysResult, RentalDay, compute_charge_days, is_chargeable_day};
pub use day_detection::{DayType, get_day_type};
pub use holiday::{
    Holiday, holiday_on, is_holiday, is_independence_day, is_labor_day, labor_day,
    observed_independence_day,
};
pub use pricing::{CURRENCY_DECIMAL_PLACES, PricingResult, price_rental, round_currency};
