//! Core catalog/invoice types, builders, and pricing.
//!
//! This module provides the data model for theater billing — plays,
//! performances, invoices — together with the pure calculator that turns
//! them into amounts owed (integer cents) and volume credits.

mod builder;
mod error;
mod pricing;
mod types;

pub use builder::*;
pub use error::*;
pub use pricing::*;
pub use types::*;
