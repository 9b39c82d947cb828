//! Application state for the rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::ToolCatalog;

/// Shared application state.
///
/// Holds the tool catalog handlers look tools up in.
#[derive(Clone)]
pub struct AppState {
    /// The tool catalog.
    catalog: Arc<ToolCatalog>,
}

impl AppState {
    /// Creates a new application state with the given catalog.
    pub fn new(catalog: ToolCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ToolCatalog::standard())
    }
}
