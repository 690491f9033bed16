//! # GST Calculator
//!
//! Goods-and-services tax in both directions:
//!
//! - **Exclusive**: the amount does not yet include GST.
//!   `gst = amount * rate`, `total = amount + gst`
//! - **Inclusive**: the amount already includes GST.
//!   `excl = amount / (1 + rate)`, `gst = amount - excl`
//!
//! Preset rates are the common Indian GST slabs; any custom percent works
//! the same way.

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Common GST rate slabs offered as presets (percent).
pub const PRESET_RATES: [f64; 4] = [5.0, 12.0, 18.0, 28.0];

/// Whether the input amount already includes GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstMode {
    /// Amount is the base price; GST gets added on top
    Exclusive,
    /// Amount is the final price; GST gets backed out
    Inclusive,
}

/// Input parameters for the GST calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "amount": 1000.0,
///   "rate_percent": 18.0,
///   "mode": "Exclusive"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstInput {
    pub amount: f64,

    /// GST rate in percent (preset slab or custom)
    pub rate_percent: f64,

    pub mode: GstMode,
}

impl GstInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ToolResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ToolError::invalid_input(
                "amount",
                self.amount.to_string(),
                "Amount must be a non-negative number",
            ));
        }
        if !self.rate_percent.is_finite() || self.rate_percent < 0.0 {
            return Err(ToolError::invalid_input(
                "rate_percent",
                self.rate_percent.to_string(),
                "GST rate must be a non-negative percent",
            ));
        }
        Ok(())
    }
}

/// GST calculation results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstResult {
    /// The tax portion
    pub gst_amount: f64,

    /// Price including GST
    pub total_amount: f64,

    /// Price excluding GST
    pub amount_excluding_gst: f64,
}

/// Calculate GST for an inclusive or exclusive amount.
pub fn calculate(input: &GstInput) -> ToolResult<GstResult> {
    input.validate()?;

    let rate = input.rate_percent / 100.0;

    let result = match input.mode {
        GstMode::Exclusive => {
            let gst = input.amount * rate;
            GstResult {
                gst_amount: gst,
                total_amount: input.amount + gst,
                amount_excluding_gst: input.amount,
            }
        }
        GstMode::Inclusive => {
            let excluding = input.amount / (1.0 + rate);
            GstResult {
                gst_amount: input.amount - excluding,
                total_amount: input.amount,
                amount_excluding_gst: excluding,
            }
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive() {
        let result = calculate(&GstInput {
            amount: 1000.0,
            rate_percent: 18.0,
            mode: GstMode::Exclusive,
        })
        .unwrap();
        assert!((result.gst_amount - 180.0).abs() < 1e-9);
        assert!((result.total_amount - 1180.0).abs() < 1e-9);
        assert!((result.amount_excluding_gst - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_inclusive() {
        let result = calculate(&GstInput {
            amount: 1180.0,
            rate_percent: 18.0,
            mode: GstMode::Inclusive,
        })
        .unwrap();
        assert!((result.amount_excluding_gst - 1000.0).abs() < 1e-9);
        assert!((result.gst_amount - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_exclusive_then_inclusive_roundtrip() {
        for rate in PRESET_RATES {
            let exclusive = calculate(&GstInput {
                amount: 2499.0,
                rate_percent: rate,
                mode: GstMode::Exclusive,
            })
            .unwrap();
            let inclusive = calculate(&GstInput {
                amount: exclusive.total_amount,
                rate_percent: rate,
                mode: GstMode::Inclusive,
            })
            .unwrap();
            assert!((inclusive.amount_excluding_gst - 2499.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let result = calculate(&GstInput {
            amount: 500.0,
            rate_percent: 0.0,
            mode: GstMode::Exclusive,
        })
        .unwrap();
        assert_eq!(result.gst_amount, 0.0);
        assert_eq!(result.total_amount, 500.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = calculate(&GstInput {
            amount: -10.0,
            rate_percent: 18.0,
            mode: GstMode::Exclusive,
        });
        assert!(matches!(result, Err(ToolError::InvalidInput { .. })));
    }
}
