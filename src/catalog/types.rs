//! Catalog document types.
//!
//! These structures are deserialized from YAML catalog documents.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A single tool entry in a catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEntry {
    /// The unique tool code (e.g., "LADW").
    pub code: String,
    /// The tool type name: "Ladder", "Chainsaw" or "Jackhammer".
    pub tool_type: String,
    /// The manufacturer brand.
    pub brand: String,
    /// Optional replacement for the tool type's standard daily charge.
    #[serde(default)]
    pub daily_charge: Option<Decimal>,
}

/// Catalog document structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    /// The tools offered for rent.
    pub tools: Vec<ToolEntry>,
}
