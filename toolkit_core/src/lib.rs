//! # toolkit_core - Calculator & Converter Engine
//!
//! `toolkit_core` is the computational heart of Toolkit, providing the pure
//! calculation functions behind a suite of everyday calculators (age, EMI,
//! GST, interest, percentage, area, profit/loss, date difference, word count)
//! plus a table-driven multi-category unit converter. All inputs and outputs
//! are JSON-serializable, making the crate easy to drive from any front-end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Total over valid inputs**: Functions return tagged errors instead of
//!   throwing, and never leak NaN/Infinity into results
//!
//! ## Quick Start
//!
//! ```rust
//! use toolkit_core::convert::{convert, UnitCategory};
//!
//! let result = convert(UnitCategory::Length, "km", "mi", 5.0).unwrap();
//! assert!((result.output_value - 3.1069).abs() < 1e-3);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - One pure function per calculator tool
//! - [`convert`] - Unit conversion registry and engine
//! - [`currency`] - Currency catalog, rate tables, and the rate-fetch boundary
//! - [`timezone`] - IANA zone catalog and wall-clock computation
//! - [`qr`] - QR-code provider URL construction
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod convert;
pub mod currency;
pub mod errors;
pub mod qr;
pub mod timezone;

// Re-export commonly used types at crate root for convenience
pub use convert::{convert, list_units, ConversionResult, UnitCategory};
pub use errors::{FetchError, ToolError, ToolResult};
