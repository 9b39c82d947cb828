//! Tool catalog.
//!
//! This module provides the [`ToolCatalog`] type, the lookup from tool code
//! to [`Tool`] record.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{CheckoutResult, RentalError};
use crate::models::{Tool, ToolType};

use super::types::CatalogDocument;

/// The tools the store rents out, keyed by tool code.
///
/// # Document Format
///
/// ```text
/// tools:
///   - code: LADW
///     tool_type: Ladder
///     brand: Werner
///   - code: CHNS
///     tool_type: Chainsaw
///     brand: Stihl
///     daily_charge: "1.59"   # optional, defaults to the type's rate
/// ```
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::models::ToolType;
///
/// let catalog = ToolCatalog::standard();
/// let tool = catalog.get_tool("JAKR").unwrap();
/// assert_eq!(tool.tool_type, ToolType::Jackhammer);
/// assert_eq!(tool.brand, "Ridgid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: BTreeMap<String, Tool>,
}

impl ToolCatalog {
    /// Returns the store's standard catalog: LADW, CHNS, JAKD and JAKR.
    pub fn standard() -> Self {
        Self::from_tools([
            Tool::with_type("CHNS", ToolType::Chainsaw, "Stihl"),
            Tool::with_type("LADW", ToolType::Ladder, "Werner"),
            Tool::with_type("JAKD", ToolType::Jackhammer, "DeWalt"),
            Tool::with_type("JAKR", ToolType::Jackhammer, "Ridgid"),
        ])
    }

    /// Builds a catalog from tool records. A later tool replaces an earlier
    /// one with the same code.
    pub fn from_tools(tools: impl IntoIterator<Item = Tool>) -> Self {
        Self {
            tools: tools
                .into_iter()
                .map(|tool| (tool.code.clone(), tool))
                .collect(),
        }
    }

    /// Parses a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// - [`RentalError::CatalogParseError`] if the YAML is malformed, lists
    ///   no tools, repeats a tool code, or sets a negative daily charge
    /// - [`RentalError::InvalidToolType`] if an entry names an unknown type
    pub fn from_yaml_str(content: &str) -> CheckoutResult<Self> {
        let document: CatalogDocument =
            serde_yaml::from_str(content).map_err(|e| RentalError::CatalogParseError {
                message: e.to_string(),
            })?;

        if document.tools.is_empty() {
            return Err(RentalError::CatalogParseError {
                message: "catalog lists no tools".to_string(),
            });
        }

        let mut tools = BTreeMap::new();
        for entry in document.tools {
            let mut tool = Tool::new(&entry.code, &entry.tool_type, &entry.brand)?;

            if let Some(daily_charge) = entry.daily_charge {
                if daily_charge < Decimal::ZERO {
                    return Err(RentalError::CatalogParseError {
                        message: format!("negative daily charge for tool {}", entry.code),
                    });
                }
                tool = tool.with_daily_charge(daily_charge);
            }

            if tools.insert(tool.code.clone(), tool).is_some() {
                return Err(RentalError::CatalogParseError {
                    message: format!("duplicate tool code {}", entry.code),
                });
            }
        }

        Ok(Self { tools })
    }

    /// Gets a tool by its code.
    ///
    /// Returns [`RentalError::ToolNotFound`] if no tool has that code.
    pub fn get_tool(&self, code: &str) -> CheckoutResult<&Tool> {
        self.tools.get(code).ok_or_else(|| RentalError::ToolNotFound {
            code: code.to_string(),
        })
    }

    /// Returns all tools, ordered by code.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
