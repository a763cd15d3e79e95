//! # playbill
//!
//! Theater billing statement library: per-performance pricing, volume
//! credits, and plain-text statement rendering.
//!
//! All monetary amounts are carried as integer minor units (cents) — never
//! floating point. Conversion to a dollar display value happens only at
//! render time, as exact decimal arithmetic via [`rust_decimal::Decimal`].
//!
//! ## Quick Start
//!
//! ```rust
//! use playbill::core::*;
//! use playbill::statement::statement;
//!
//! let catalog = CatalogBuilder::new()
//!     .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
//!     .add_play("as-like", Play::new("As You Like It", PlayCategory::Comedy))
//!     .build()
//!     .unwrap();
//!
//! let invoice = InvoiceBuilder::new("BigCo")
//!     .add_performance("hamlet", 55)
//!     .add_performance("as-like", 35)
//!     .build();
//!
//! let text = statement(&invoice, &catalog).unwrap();
//! assert!(text.starts_with("Statement for BigCo\n"));
//! assert!(text.contains("  Hamlet: $650.00 (55 seats)\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Catalog/invoice types, pricing and volume-credit calculation |
//! | `statement` (default) | Plain-text statement rendering |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "statement")]
pub mod statement;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
