//! Ledgerview
//!
//! Ledgerview is a typed filtering, sorting, pagination and aggregation engine for
//! business-dashboard record collections (clients, invoices, payments, suspended users).

pub mod actions;
pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod page;
pub mod prelude;
pub mod records;
pub mod render;
pub mod sort;
pub mod status;
pub mod summary;
pub mod utils;
pub mod view;
