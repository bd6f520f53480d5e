//! Folio
//!
//! Folio is a bookstore inventory and checkout pricing engine written in Rust: catalog import,
//! multi-variant stock, atomic basket fulfilment and category-based first-copy discounts.

pub mod allocation;
pub mod availability;
pub mod basket;
pub mod catalog;
pub mod inventory;
pub mod prelude;
pub mod pricing;
pub mod store;
pub mod utils;
