//! HTTP API module for the tool rental engine.
//!
//! A thin driver over [`crate::checkout`]: it looks tools up in the catalog
//! and returns priced agreements as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::{ApiError, CheckoutResponse};
pub use state::AppState;
