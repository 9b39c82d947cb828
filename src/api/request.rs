//! Request types for the rental API.
//!
//! This module defines the JSON request structure for the `/checkout`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/checkout` endpoint.
///
/// Day count and discount are accepted as signed integers so that out of
/// range values reach validation and are reported as such.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The code of the tool to rent (e.g., "LADW").
    pub tool_code: String,
    /// Number of rental days.
    pub rental_days: i64,
    /// Whole-number discount percent.
    pub discount_percent: i64,
    /// The checkout date.
    pub checkout_date: NaiveDate,
}
