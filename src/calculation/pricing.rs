//! Rental pricing.
//!
//! Turns a billable day count into pre-discount, discount and final
//! charges. All arithmetic is exact [`Decimal`]; the discount is rounded to
//! cents first and the final charge is rounded again after subtraction.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutResult, RentalError};

/// Number of decimal places money is rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The charges for a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Charge days times the daily charge.
    pub pre_discount_charge: Decimal,
    /// The discount, rounded half-up to cents.
    pub discount_amount: Decimal,
    /// The pre-discount charge less the discount, rounded half-up to cents.
    pub final_charge: Decimal,
}

/// Rounds an amount half-up to whole cents, always carrying two decimal
/// places.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("0.995").unwrap()).to_string(), "1.00");
/// assert_eq!(round_currency(Decimal::from_str("1.1175").unwrap()).to_string(), "1.12");
/// assert_eq!(round_currency(Decimal::from(3)).to_string(), "3.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Prices a rental from its billable days, daily charge and discount.
///
/// # Arguments
///
/// * `charge_days` - Number of billable days
/// * `daily_charge` - The charge for one billable day
/// * `discount_percent` - Whole-number discount percent, 0 to 100
///
/// # Errors
///
/// Returns [`RentalError::ChargeOverflow`] if the charge does not fit in a
/// [`Decimal`].
///
/// # Example
///
/// ```
/// use tool_rental::calculation::price_rental;
/// use rust_decimal::Decimal;
///
/// let pricing = price_rental(3, Decimal::new(149, 2), 25).unwrap();
/// assert_eq!(pricing.pre_discount_charge, Decimal::new(447, 2));
/// assert_eq!(pricing.discount_amount, Decimal::new(112, 2));
/// assert_eq!(pricing.final_charge, Decimal::new(335, 2));
/// ```
pub fn price_rental(
    charge_days: u32,
    daily_charge: Decimal,
    discount_percent: u32,
) -> CheckoutResult<PricingResult> {
    let overflow = || RentalError::ChargeOverflow {
        charge_days,
        daily_charge,
    };

    let pre_discount_charge = Decimal::from(charge_days)
        .checked_mul(daily_charge)
        .ok_or_else(overflow)?;
    let discount_amount = pre_discount_charge
        .checked_mul(Decimal::from(discount_percent))
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .map(round_currency)
        .ok_or_else(overflow)?;
    let final_charge = pre_discount_charge
        .checked_sub(discount_amount)
        .map(round_currency)
        .ok_or_else(overflow)?;

    Ok(PricingResult {
        pre_discount_charge,
        discount_amount,
        final_charge,
    })
}
