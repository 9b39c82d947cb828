//! The rental agreement handed back to the customer.
//!
//! This module contains the [`RentalAgreement`] type and the fixed text
//! layout it is printed in.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::calculation::RentalDay;

use super::{RentalRequest, RentalResult, Tool};

/// Date layout used on printed agreements, e.g. `07/02/24`.
pub const AGREEMENT_DATE_FORMAT: &str = "%m/%d/%y";

/// A completed rental agreement: the tool, the validated request and the
/// charges derived from it.
///
/// Built by [`crate::checkout::checkout`]; there is no way to construct an
/// agreement with inconsistent charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    tool: Tool,
    request: RentalRequest,
    result: RentalResult,
    breakdown: Vec<RentalDay>,
}

impl RentalAgreement {
    pub(crate) fn new(
        tool: Tool,
        request: RentalRequest,
        result: RentalResult,
        breakdown: Vec<RentalDay>,
    ) -> Self {
        Self {
            tool,
            request,
            result,
            breakdown,
        }
    }

    /// Returns the rented tool.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Returns the validated request.
    pub fn request(&self) -> &RentalRequest {
        &self.request
    }

    /// Returns the derived charges.
    pub fn result(&self) -> &RentalResult {
        &self.result
    }

    /// Returns every day of the rental window with its chargeability.
    pub fn breakdown(&self) -> &[RentalDay] {
        &self.breakdown
    }

    /// Returns the number of rental days.
    pub fn rental_days(&self) -> u32 {
        self.request.rental_days()
    }

    /// Returns the discount percent.
    pub fn discount_percent(&self) -> u32 {
        self.request.discount_percent()
    }

    /// Returns the checkout date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.request.checkout_date()
    }

    /// Returns the due date.
    pub fn due_date(&self) -> NaiveDate {
        self.result.due_date
    }

    /// Returns the number of billable days.
    pub fn charge_days(&self) -> u32 {
        self.result.charge_days
    }

    /// Returns the charge before discount.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.result.pre_discount_charge
    }

    /// Returns the discount amount.
    pub fn discount_amount(&self) -> Decimal {
        self.result.discount_amount
    }

    /// Returns the final charge.
    pub fn final_charge(&self) -> Decimal {
        self.result.final_charge
    }

    /// Renders the agreement as printable text.
    ///
    /// # Example
    ///
    /// ```
    /// use tool_rental::checkout::checkout;
    /// use tool_rental::models::Tool;
    /// use chrono::NaiveDate;
    ///
    /// let tool = Tool::new("LADW", "Ladder", "Werner").unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let agreement = checkout(&tool, 5, 10, date).unwrap();
    ///
    /// let text = agreement.render();
    /// assert!(text.starts_with("Tool code: LADW\n"));
    /// assert!(text.contains("Check out date: 03/15/24\n"));
    /// assert!(text.ends_with("Final charge: $8.95\n"));
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool.code)?;
        writeln!(f, "Tool type: {}", self.tool.tool_type)?;
        writeln!(f, "Tool brand: {}", self.tool.brand)?;
        writeln!(f, "Rental days: {}", self.rental_days())?;
        writeln!(f, "Check out date: {}", format_date(self.checkout_date()))?;
        writeln!(f, "Due date: {}", format_date(self.due_date()))?;
        writeln!(
            f,
            "Daily rental charge: {}",
            format_currency(self.tool.policy.daily_charge)
        )?;
        writeln!(f, "Charge days: {}", self.charge_days())?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_currency(self.pre_discount_charge())
        )?;
        writeln!(f, "Discount percent: {}%", self.discount_percent())?;
        writeln!(
            f,
            "Discount amount: {}",
            format_currency(self.discount_amount())
        )?;
        writeln!(f, "Final charge: {}", format_currency(self.final_charge()))
    }
}

/// Formats a date as `MM/DD/YY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(AGREEMENT_DATE_FORMAT).to_string()
}

/// Formats an amount as US currency, e.g. `$1,234.50`.
///
/// Amounts are rounded half-up to cents for display.
///
/// # Example
///
/// ```
/// use tool_rental::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
/// assert_eq!(format_currency(Decimal::new(5, 1)), "$0.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);

    let digits = cents.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}
