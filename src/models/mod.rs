//! Core data models for the tool rental engine.
//!
//! This module contains the tool records, the validated rental request and
//! the agreement produced at checkout.

mod agreement;
mod rental;
mod tool;

pub use agreement::{AGREEMENT_DATE_FORMAT, RentalAgreement, format_currency, format_date};
pub use rental::{MAX_DISCOUNT_PERCENT, MAX_RENTAL_DAYS, RentalRequest, RentalResult};
pub use tool::{Tool, ToolPolicy, ToolType};
