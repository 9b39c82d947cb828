//! Tool model and charging policy types.
//!
//! This module defines the [`Tool`] record, the [`ToolType`] enum and the
//! [`ToolPolicy`] each tool type charges under.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutResult, RentalError};

/// The charging policy of a tool: its daily rate and which kinds of day
/// are billed.
///
/// `weekday_charge` is carried with every policy but never excludes a day
/// from billing; only the weekend and holiday flags do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPolicy {
    /// The charge for one billable day.
    pub daily_charge: Decimal,
    /// Whether weekdays are billed.
    pub weekday_charge: bool,
    /// Whether Saturdays and Sundays are billed.
    pub weekend_charge: bool,
    /// Whether observed holidays are billed.
    pub holiday_charge: bool,
}

/// The kinds of tool the store rents out.
///
/// Each type maps to exactly one [`ToolPolicy`] through [`ToolType::policy`].
///
/// # Example
///
/// ```
/// use tool_rental::models::ToolType;
/// use rust_decimal::Decimal;
///
/// let policy = ToolType::Ladder.policy();
/// assert_eq!(policy.daily_charge, Decimal::new(199, 2));
/// assert!(policy.weekend_charge);
/// assert!(!policy.holiday_charge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
    /// Billed every day except holidays.
    Ladder,
    /// Billed on weekdays and holidays, free on weekends.
    Chainsaw,
    /// Billed on ordinary weekdays only.
    Jackhammer,
}

impl ToolType {
    /// All tool types, in catalog order.
    pub const ALL: [ToolType; 3] = [ToolType::Ladder, ToolType::Chainsaw, ToolType::Jackhammer];

    /// Returns the charging policy for this tool type.
    pub fn policy(self) -> ToolPolicy {
        match self {
            ToolType::Ladder => ToolPolicy {
                daily_charge: Decimal::new(199, 2),
                weekday_charge: true,
                weekend_charge: true,
                holiday_charge: false,
            },
            ToolType::Chainsaw => ToolPolicy {
                daily_charge: Decimal::new(149, 2),
                weekday_charge: true,
                weekend_charge: false,
                holiday_charge: true,
            },
            ToolType::Jackhammer => ToolPolicy {
                daily_charge: Decimal::new(299, 2),
                weekday_charge: true,
                weekend_charge: false,
                holiday_charge: false,
            },
        }
    }

    /// Returns the display name of this tool type.
    pub fn name(self) -> &'static str {
        match self {
            ToolType::Ladder => "Ladder",
            ToolType::Chainsaw => "Chainsaw",
            ToolType::Jackhammer => "Jackhammer",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolType {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|tool_type| tool_type.name() == s)
            .ok_or_else(|| RentalError::InvalidToolType {
                tool_type: s.to_string(),
            })
    }
}

/// A rentable tool as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The unique tool code (e.g., "LADW").
    pub code: String,
    /// The kind of tool.
    pub tool_type: ToolType,
    /// The manufacturer brand.
    pub brand: String,
    /// The charging policy, normally the tool type's standard policy.
    pub policy: ToolPolicy,
}

impl Tool {
    /// Creates a tool from its code, type name and brand.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidToolType`] if `tool_type` is not one of
    /// "Ladder", "Chainsaw" or "Jackhammer".
    ///
    /// # Example
    ///
    /// ```
    /// use tool_rental::models::{Tool, ToolType};
    ///
    /// let tool = Tool::new("CHNS", "Chainsaw", "Stihl").unwrap();
    /// assert_eq!(tool.tool_type, ToolType::Chainsaw);
    ///
    /// assert!(Tool::new("HAMR", "Hammer", "Estwing").is_err());
    /// ```
    pub fn new(code: &str, tool_type: &str, brand: &str) -> CheckoutResult<Self> {
        let tool_type = tool_type.parse::<ToolType>()?;
        Ok(Self::with_type(code, tool_type, brand))
    }

    /// Creates a tool of a known type with that type's standard policy.
    pub fn with_type(code: &str, tool_type: ToolType, brand: &str) -> Self {
        Self {
            code: code.to_string(),
            tool_type,
            brand: brand.to_string(),
            policy: tool_type.policy(),
        }
    }

    /// Returns this tool with its daily charge replaced.
    pub fn with_daily_charge(mut self, daily_charge: Decimal) -> Self {
        self.policy.daily_charge = daily_charge;
        self
    }
}
