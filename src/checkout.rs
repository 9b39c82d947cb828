//! Checkout: validates a rental and produces its agreement.
//!
//! Validation runs before any charge computation, so a failed checkout
//! never leaves a partially priced agreement behind.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{compute_charge_days, price_rental};
use crate::error::CheckoutResult;
use crate::models::{RentalAgreement, RentalRequest, RentalResult, Tool};

/// Checks a tool out and returns the completed rental agreement.
///
/// # Arguments
///
/// * `tool` - The tool being rented
/// * `rental_days` - Number of rental days, at least 1
/// * `discount_percent` - Whole-number discount percent, 0 to 100
/// * `checkout_date` - The day the tool leaves the store
///
/// # Errors
///
/// - [`crate::error::RentalError::InvalidRentalDays`] if `rental_days` < 1
/// - [`crate::error::RentalError::RentalTooLong`] if `rental_days` is above
///   [`crate::models::MAX_RENTAL_DAYS`]
/// - [`crate::error::RentalError::InvalidDiscountPercent`] if
///   `discount_percent` is outside 0..=100
/// - [`crate::error::RentalError::DateOutOfRange`] if the due date cannot
///   be represented
/// - [`crate::error::RentalError::ChargeOverflow`] if the tool's daily
///   charge is too large to price
///
/// # Example
///
/// ```
/// use tool_rental::checkout::checkout;
/// use tool_rental::models::Tool;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let chainsaw = Tool::new("CHNS", "Chainsaw", "Stihl").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
///
/// let agreement = checkout(&chainsaw, 3, 25, date).unwrap();
/// assert_eq!(agreement.charge_days(), 3);
/// assert_eq!(agreement.final_charge(), Decimal::new(335, 2));
///
/// assert!(checkout(&chainsaw, 3, 101, date).is_err());
/// ```
pub fn checkout(
    tool: &Tool,
    rental_days: i64,
    discount_percent: i64,
    checkout_date: NaiveDate,
) -> CheckoutResult<RentalAgreement> {
    let request = RentalRequest::new(tool.policy, rental_days, discount_percent, checkout_date)?;

    let charges = compute_charge_days(
        request.checkout_date(),
        request.rental_days(),
        request.policy(),
    )?;
    let pricing = price_rental(
        charges.charge_days,
        request.policy().daily_charge,
        request.discount_percent(),
    )?;

    debug!(
        tool_code = %tool.code,
        rental_days = request.rental_days(),
        discount_percent = request.discount_percent(),
        checkout_date = %request.checkout_date(),
        charge_days = charges.charge_days,
        final_charge = %pricing.final_charge,
        "Rental priced"
    );

    let result = RentalResult {
        due_date: charges.due_date,
        charge_days: charges.charge_days,
        pre_discount_charge: pricing.pre_discount_charge,
        discount_amount: pricing.discount_amount,
        final_charge: pricing.final_charge,
    };

    Ok(RentalAgreement::new(
        tool.clone(),
        request,
        result,
        charges.days,
    ))
}
