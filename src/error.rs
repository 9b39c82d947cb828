//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a checkout from producing an agreement.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// Validation failures are raised before any charge computation runs, so
/// an error always means no agreement was produced.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::InvalidRentalDays { days: 0 };
/// assert_eq!(
///     error.to_string(),
///     "Rental day count must be 1 or greater, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// The rental day count was below 1.
    #[error("Rental day count must be 1 or greater, got {days}")]
    InvalidRentalDays {
        /// The rejected day count.
        days: i64,
    },

    /// The rental day count was above the longest rental a checkout accepts.
    #[error("Rental day count must be at most {max}, got {days}")]
    RentalTooLong {
        /// The rejected day count.
        days: i64,
        /// The longest accepted rental.
        max: i64,
    },

    /// The discount percent was outside 0..=100.
    #[error("Discount percent must be between 0 and 100, got {percent}")]
    InvalidDiscountPercent {
        /// The rejected discount percent.
        percent: i64,
    },

    /// A tool was built with a type name the catalog does not know.
    #[error("Invalid tool type: {tool_type}")]
    InvalidToolType {
        /// The unrecognized tool type name.
        tool_type: String,
    },

    /// No tool with the given code exists in the catalog.
    #[error("Tool not found: {code}")]
    ToolNotFound {
        /// The tool code that was not found.
        code: String,
    },

    /// A catalog document could not be parsed.
    #[error("Failed to parse tool catalog: {message}")]
    CatalogParseError {
        /// A description of the parse error.
        message: String,
    },

    /// The rental window runs past the last representable calendar date.
    #[error("Rental of {days} days from {date} exceeds the supported calendar range")]
    DateOutOfRange {
        /// The checkout date.
        date: NaiveDate,
        /// The requested rental day count.
        days: i64,
    },

    /// The charge for a rental is too large to represent.
    #[error("Charge for {charge_days} days at {daily_charge} per day is too large")]
    ChargeOverflow {
        /// The billable day count.
        charge_days: u32,
        /// The daily charge of the rented tool.
        daily_charge: Decimal,
    },
}

/// A type alias for Results that return RentalError.
pub type CheckoutResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rental_days_displays_count() {
        let error = RentalError::InvalidRentalDays { days: -3 };
        assert_eq!(
            error.to_string(),
            "Rental day count must be 1 or greater, got -3"
        );
    }

    #[test]
    fn test_invalid_discount_percent_displays_percent() {
        let error = RentalError::InvalidDiscountPercent { percent: 101 };
        assert_eq!(
            error.to_string(),
            "Discount percent must be between 0 and 100, got 101"
        );
    }

    #[test]
    fn test_invalid_tool_type_displays_name() {
        let error = RentalError::InvalidToolType {
            tool_type: "Hammer".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid tool type: Hammer");
    }

    #[test]
    fn test_tool_not_found_displays_code() {
        let error = RentalError::ToolNotFound {
            code: "XXXX".to_string(),
        };
        assert_eq!(error.to_string(), "Tool not found: XXXX");
    }

    #[test]
    fn test_catalog_parse_error_displays_message() {
        let error = RentalError::CatalogParseError {
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse tool catalog: invalid YAML syntax"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_date_and_days() {
        let error = RentalError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            days: 5,
        };
        assert_eq!(
            error.to_string(),
            "Rental of 5 days from 2024-03-15 exceeds the supported calendar range"
        );
    }

    #[test]
    fn test_rental_too_long_displays_limit() {
        let error = RentalError::RentalTooLong {
            days: 20_000_000,
            max: 3650,
        };
        assert_eq!(
            error.to_string(),
            "Rental day count must be at most 3650, got 20000000"
        );
    }

    #[test]
    fn test_charge_overflow_displays_days_and_rate() {
        let error = RentalError::ChargeOverflow {
            charge_days: 3,
            daily_charge: Decimal::new(149, 2),
        };
        assert_eq!(
            error.to_string(),
            "Charge for 3 days at 1.49 per day is too large"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RentalError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_days() -> CheckoutResult<()> {
            Err(RentalError::InvalidRentalDays { days: 0 })
        }

        fn propagates_error() -> CheckoutResult<()> {
            returns_invalid_days()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(RentalError::InvalidRentalDays { days: 0 })
        );
    }
}
