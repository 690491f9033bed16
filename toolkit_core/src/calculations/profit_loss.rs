//! # Profit/Loss Calculator
//!
//! Profit or loss on a sale of `quantity` units, with optional extra
//! expenses folded into the total cost:
//!
//! ```text
//! total_cost    = cost_price * quantity + extra_expenses
//! total_revenue = selling_price * quantity
//! profit_loss   = total_revenue - total_cost
//! percentage    = |profit_loss| / total_cost * 100
//! margin        = profit_loss / total_revenue * 100
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

fn default_quantity() -> u32 {
    1
}

/// Input parameters for the profit/loss calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cost_price": 80.0,
///   "selling_price": 100.0,
///   "quantity": 5,
///   "extra_expenses": 20.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitLossInput {
    /// Cost per unit
    pub cost_price: f64,

    /// Selling price per unit
    pub selling_price: f64,

    /// Number of units (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// One-off expenses added to the total cost (shipping, fees, ...)
    #[serde(default)]
    pub extra_expenses: f64,
}

impl ProfitLossInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ToolResult<()> {
        if !self.cost_price.is_finite() || self.cost_price < 0.0 {
            return Err(ToolError::invalid_input(
                "cost_price",
                self.cost_price.to_string(),
                "Cost price must be a non-negative number",
            ));
        }
        if !self.selling_price.is_finite() || self.selling_price < 0.0 {
            return Err(ToolError::invalid_input(
                "selling_price",
                self.selling_price.to_string(),
                "Selling price must be a non-negative number",
            ));
        }
        if self.quantity == 0 {
            return Err(ToolError::invalid_input(
                "quantity",
                "0",
                "Quantity must be at least 1",
            ));
        }
        if !self.extra_expenses.is_finite() || self.extra_expenses < 0.0 {
            return Err(ToolError::invalid_input(
                "extra_expenses",
                self.extra_expenses.to_string(),
                "Extra expenses must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Profit/loss calculation results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitLossResult {
    pub total_cost: f64,
    pub total_revenue: f64,

    /// Positive for profit, negative for loss
    pub profit_or_loss: f64,

    /// |profit_or_loss| as a percent of total cost
    pub percentage: f64,

    /// profit_or_loss as a percent of revenue; absent when revenue is zero
    pub margin_percent: Option<f64>,

    /// True when the outcome is break-even or better
    pub is_profit: bool,
}

/// Calculate profit or loss for the transaction.
///
/// # Returns
///
/// * `Ok(ProfitLossResult)` - Totals plus percentage and margin
/// * `Err(ToolError)` - `InvalidInput` when the total cost is zero (the
///   percentage would be undefined) or any input is out of range
pub fn calculate(input: &ProfitLossInput) -> ToolResult<ProfitLossResult> {
    input.validate()?;

    let quantity = f64::from(input.quantity);
    let total_cost = input.cost_price * quantity + input.extra_expenses;
    let total_revenue = input.selling_price * quantity;

    if total_cost == 0.0 {
        return Err(ToolError::invalid_input(
            "cost_price",
            input.cost_price.to_string(),
            "Total cost is zero; profit percentage is undefined",
        ));
    }

    let profit_or_loss = total_revenue - total_cost;
    let margin_percent = if total_revenue > 0.0 {
        Some(profit_or_loss / total_revenue * 100.0)
    } else {
        None
    };

    Ok(ProfitLossResult {
        total_cost,
        total_revenue,
        profit_or_loss,
        percentage: profit_or_loss.abs() / total_cost * 100.0,
        margin_percent,
        is_profit: profit_or_loss >= 0.0,
    })
}
