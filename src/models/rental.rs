//! Rental request and result models.
//!
//! A [`RentalRequest`] can only be built from inputs that pass validation;
//! a [`RentalResult`] is derived from it once and never changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutResult, RentalError};

use super::ToolPolicy;

/// The largest discount percent a checkout accepts.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

/// The longest rental, in days, a checkout accepts.
///
/// Bounds the per-day breakdown an agreement carries.
pub const MAX_RENTAL_DAYS: i64 = 3650;

/// A validated rental request.
///
/// # Example
///
/// ```
/// use tool_rental::models::{RentalRequest, ToolType};
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let request = RentalRequest::new(ToolType::Ladder.policy(), 5, 10, checkout).unwrap();
/// assert_eq!(request.rental_days(), 5);
///
/// assert!(RentalRequest::new(ToolType::Ladder.policy(), 0, 10, checkout).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalRequest {
    policy: ToolPolicy,
    rental_days: u32,
    discount_percent: u32,
    checkout_date: NaiveDate,
}

impl RentalRequest {
    /// Validates the inputs and builds a request.
    ///
    /// # Errors
    ///
    /// - [`RentalError::InvalidRentalDays`] when `rental_days` is below 1
    /// - [`RentalError::RentalTooLong`] when `rental_days` is above
    ///   [`MAX_RENTAL_DAYS`]
    /// - [`RentalError::InvalidDiscountPercent`] when `discount_percent` is
    ///   outside 0..=100
    pub fn new(
        policy: ToolPolicy,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> CheckoutResult<Self> {
        if rental_days < 1 {
            return Err(RentalError::InvalidRentalDays { days: rental_days });
        }
        if rental_days > MAX_RENTAL_DAYS {
            return Err(RentalError::RentalTooLong {
                days: rental_days,
                max: MAX_RENTAL_DAYS,
            });
        }
        if !(0..=MAX_DISCOUNT_PERCENT).contains(&discount_percent) {
            return Err(RentalError::InvalidDiscountPercent {
                percent: discount_percent,
            });
        }

        // Both ranges checked above
        Ok(Self {
            policy,
            rental_days: rental_days as u32,
            discount_percent: discount_percent as u32,
            checkout_date,
        })
    }

    /// Returns the charging policy of the rented tool.
    pub fn policy(&self) -> &ToolPolicy {
        &self.policy
    }

    /// Returns the number of rental days, always at least 1.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// Returns the discount percent, always within 0..=100.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Returns the checkout date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }
}

/// The charges derived from a [`RentalRequest`].
///
/// `discount_amount` and `final_charge` always carry exactly two decimal
/// places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalResult {
    /// The checkout date plus the rental day count.
    pub due_date: NaiveDate,
    /// The number of billable days in the rental window.
    pub charge_days: u32,
    /// Charge days times the daily charge, unrounded.
    pub pre_discount_charge: Decimal,
    /// The discount, rounded half-up to cents.
    pub discount_amount: Decimal,
    /// The pre-discount charge less the discount, rounded half-up to cents.
    pub final_charge: Decimal,
}
