//! Tool catalog for the rental engine.
//!
//! The catalog maps tool codes to tool records. The standard catalog is
//! built in; alternative catalogs can be parsed from YAML text.
//!
//! # Example
//!
//! ```
//! use tool_rental::catalog::ToolCatalog;
//!
//! let catalog = ToolCatalog::standard();
//! let ladder = catalog.get_tool("LADW").unwrap();
//! println!("{} {}", ladder.brand, ladder.tool_type);
//! ```

mod loader;
mod types;

pub use loader::ToolCatalog;
pub use types::{CatalogDocument, ToolEntry};
