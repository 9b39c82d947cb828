//! Tool Rental Pricing Engine
//!
//! This crate computes rental agreements for a tool rental store: the due
//! date, the billable days under each tool's weekend and holiday policy, and
//! the discounted charge rounded to cents.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod models;
