//! # Percentage Calculator
//!
//! Three independent percentage operations:
//!
//! - [`percent_of`]: X% of Y
//! - [`is_what_percent`]: X is what percent of Y (undefined for Y = 0)
//! - [`percentage_change`]: relative change from one value to another,
//!   labeled as an increase or decrease (undefined for a starting value of 0)

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

fn require_finite(field: &str, value: f64) -> ToolResult<()> {
    if !value.is_finite() {
        return Err(ToolError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// `percent`% of `value`: `(percent / 100) * value`.
pub fn percent_of(percent: f64, value: f64) -> ToolResult<f64> {
    require_finite("percent", percent)?;
    require_finite("value", value)?;
    Ok(percent / 100.0 * value)
}

/// What percent of `whole` is `part`: `(part / whole) * 100`.
///
/// Fails with `InvalidInput` when `whole` is zero.
pub fn is_what_percent(part: f64, whole: f64) -> ToolResult<f64> {
    require_finite("part", part)?;
    require_finite("whole", whole)?;
    if whole == 0.0 {
        return Err(ToolError::invalid_input(
            "whole",
            "0",
            "Cannot compute a percentage of zero",
        ));
    }
    Ok(part / whole * 100.0)
}

/// Relative change between two values.
///
/// ## JSON Example
///
/// ```json
/// {
///   "change_amount": 25.0,
///   "percent_change": 25.0,
///   "is_increase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PercentageChange {
    /// Absolute difference between the two values
    pub change_amount: f64,

    /// Magnitude of the relative change in percent
    pub percent_change: f64,

    /// Direction of the change (a change of exactly 0 counts as an increase)
    pub is_increase: bool,
}

impl PercentageChange {
    /// Human-readable summary, e.g. "25.00% increase"
    pub fn label(&self) -> String {
        format!(
            "{:.2}% {}",
            self.percent_change,
            if self.is_increase { "increase" } else { "decrease" }
        )
    }
}

/// Percentage change from `from` to `to`: `(to - from) / |from| * 100`.
///
/// Fails with `InvalidInput` when `from` is zero.
pub fn percentage_change(from: f64, to: f64) -> ToolResult<PercentageChange> {
    require_finite("from", from)?;
    require_finite("to", to)?;
    if from == 0.0 {
        return Err(ToolError::invalid_input(
            "from",
            "0",
            "Percentage change from zero is undefined",
        ));
    }

    let change = to - from;
    let percent = change / from.abs() * 100.0;

    Ok(PercentageChange {
        change_amount: change.abs(),
        percent_change: percent.abs(),
        is_increase: percent >= 0.0,
    })
}
