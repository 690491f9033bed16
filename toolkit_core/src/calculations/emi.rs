//! # EMI Calculator
//!
//! Equated monthly installment for an amortizing loan:
//!
//! ```text
//! EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `r` is the monthly rate (annual percent / 100 / 12) and `n` the term
//! in months. A zero rate makes the closed form 0/0, which is rejected as
//! `InvalidInput` instead of propagating NaN.
//!
//! ## Example
//!
//! ```rust
//! use toolkit_core::calculations::emi::{calculate, LoanInput};
//!
//! let input = LoanInput {
//!     principal: 100_000.0,
//!     annual_rate_percent: 9.0,
//!     term_years: 10.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.monthly_payment - 1266.76).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Input parameters for the EMI calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 100000.0,
///   "annual_rate_percent": 9.0,
///   "term_years": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Loan principal (must be positive)
    pub principal: f64,

    /// Annual interest rate in percent (must be positive; 0% has no
    /// amortization closed form)
    pub annual_rate_percent: f64,

    /// Loan term in years (must be positive)
    pub term_years: f64,
}

impl LoanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ToolResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(ToolError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Principal must be positive",
            ));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(ToolError::invalid_input(
                "annual_rate_percent",
                self.annual_rate_percent.to_string(),
                "Interest rate must be non-negative",
            ));
        }
        if self.annual_rate_percent == 0.0 {
            return Err(ToolError::invalid_input(
                "annual_rate_percent",
                "0",
                "A zero rate makes the amortization formula undefined",
            ));
        }
        if !self.term_years.is_finite() || self.term_years <= 0.0 {
            return Err(ToolError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                "Loan term must be positive",
            ));
        }
        Ok(())
    }
}

/// EMI calculation results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_payment": 1266.76,
///   "total_payment": 152010.93,
///   "total_interest": 52010.93,
///   "term_months": 120.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmiResult {
    /// The fixed monthly installment
    pub monthly_payment: f64,

    /// monthly_payment * term_months
    pub total_payment: f64,

    /// total_payment - principal
    pub total_interest: f64,

    /// Term expressed in months
    pub term_months: f64,
}

/// Calculate the equated monthly installment.
///
/// # Returns
///
/// * `Ok(EmiResult)` - Monthly payment with interest totals
/// * `Err(ToolError)` - `InvalidInput` for non-positive principal/term, a
///   zero rate, or a non-finite intermediate
pub fn calculate(input: &LoanInput) -> ToolResult<EmiResult> {
    input.validate()?;

    let monthly_rate = input.annual_rate_percent / 100.0 / 12.0;
    let term_months = input.term_years * 12.0;

    let growth = (1.0 + monthly_rate).powf(term_months);
    let emi = input.principal * monthly_rate * growth / (growth - 1.0);

    if !emi.is_finite() {
        return Err(ToolError::invalid_input(
            "annual_rate_percent",
            input.annual_rate_percent.to_string(),
            "Amortization formula produced a non-finite result",
        ));
    }

    let total_payment = emi * term_months;

    Ok(EmiResult {
        monthly_payment: emi,
        total_payment,
        total_interest: total_payment - input.principal,
        term_months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(principal: f64, rate: f64, years: f64) -> LoanInput {
        LoanInput {
            principal,
            annual_rate_percent: rate,
            term_years: years,
        }
    }

    #[test]
    fn test_known_emi() {
        // 100k at 9% over 10 years: 1266.76/month is the textbook value.
        let result = calculate(&loan(100_000.0, 9.0, 10.0)).unwrap();
        assert!((result.monthly_payment - 1266.76).abs() < 0.01);
        assert!((result.total_payment - result.monthly_payment * 120.0).abs() < 1e-6);
        assert!((result.total_interest - (result.total_payment - 100_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_emi_increases_with_rate() {
        let low = calculate(&loan(100_000.0, 5.0, 10.0)).unwrap();
        let mid = calculate(&loan(100_000.0, 7.5, 10.0)).unwrap();
        let high = calculate(&loan(100_000.0, 10.0, 10.0)).unwrap();
        assert!(low.monthly_payment < mid.monthly_payment);
        assert!(mid.monthly_payment < high.monthly_payment);
    }

    #[test]
    fn test_emi_decreases_with_term() {
        let short = calculate(&loan(100_000.0, 7.5, 5.0)).unwrap();
        let long = calculate(&loan(100_000.0, 7.5, 20.0)).unwrap();
        assert!(short.monthly_payment > long.monthly_payment);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let result = calculate(&loan(100_000.0, 0.0, 10.0));
        assert!(matches!(result, Err(ToolError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_positive_principal_rejected() {
        assert!(calculate(&loan(0.0, 9.0, 10.0)).is_err());
        assert!(calculate(&loan(-100.0, 9.0, 10.0)).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&loan(100_000.0, 9.0, 10.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("monthly_payment"));
        let roundtrip: EmiResult = serde_json::from_str(&json).unwrap();
        assert!((result.monthly_payment - roundtrip.monthly_payment).abs() < 1e-9);
    }
}
