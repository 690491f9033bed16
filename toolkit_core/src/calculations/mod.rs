//! # Calculator Tools
//!
//! This module contains all calculator tools. Each tool follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, ToolError>` - Pure calculation function
//!
//! Inputs are validated before the math runs; mathematically undefined values
//! (division by zero, 0/0 in the amortization formula) surface as
//! `InvalidInput`, never as NaN or Infinity in a result.
//!
//! ## Available Calculators
//!
//! - [`age`] - Age breakdown and next-birthday countdown
//! - [`area`] - Area and perimeter for basic shapes
//! - [`date_difference`] - Span between two dates
//! - [`emi`] - Equated monthly installment for amortizing loans
//! - [`gst`] - Goods-and-services tax, inclusive or exclusive
//! - [`interest`] - Simple and compound interest
//! - [`percentage`] - Percent-of, is-what-percent, percentage change
//! - [`profit_loss`] - Profit/loss with percentage and margin
//! - [`text_stats`] - Word, character, sentence, and paragraph counts

pub mod age;
pub mod area;
pub mod date_difference;
pub mod emi;
pub mod gst;
pub mod interest;
pub mod percentage;
pub mod profit_loss;
pub mod text_stats;

// Re-export commonly used types
pub use age::{AgeInput, AgeResult};
pub use area::{AreaResult, Shape};
pub use date_difference::{DateDifferenceInput, DateDifferenceResult};
pub use emi::{EmiResult, LoanInput};
pub use gst::{GstInput, GstMode, GstResult};
pub use interest::{CompoundingFrequency, InterestInput, InterestResult};
pub use percentage::PercentageChange;
pub use profit_loss::{ProfitLossInput, ProfitLossResult};
pub use text_stats::TextStats;
