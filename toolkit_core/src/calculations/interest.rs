//! # Interest Calculator
//!
//! Simple interest `I = P * r * t` and compound interest
//! `total = P * (1 + r/n)^(n*t)` where `n` is the number of compoundings per
//! year.

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// How often interest compounds per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CompoundingFrequency {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// All frequencies, in the order front-ends list them
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Compounding periods per year
    pub fn periods_per_year(&self) -> f64 {
        match self {
            CompoundingFrequency::Annually => 1.0,
            CompoundingFrequency::SemiAnnually => 2.0,
            CompoundingFrequency::Quarterly => 4.0,
            CompoundingFrequency::Monthly => 12.0,
            CompoundingFrequency::Daily => 365.0,
        }
    }

    /// Display name for selection UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

/// Shared input parameters for both interest modes.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 1000.0,
///   "annual_rate_percent": 5.0,
///   "term_years": 3.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl InterestInput {
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
        if !self.term_years.is_finite() || self.term_years < 0.0 {
            return Err(ToolError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                "Term must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Interest calculation results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterestResult {
    /// Interest earned over the term
    pub interest: f64,

    /// Principal plus interest
    pub total_amount: f64,
}

/// Calculate simple interest: `I = P * r * t`.
pub fn simple(input: &InterestInput) -> ToolResult<InterestResult> {
    input.validate()?;

    let rate = input.annual_rate_percent / 100.0;
    let interest = input.principal * rate * input.term_years;

    Ok(InterestResult {
        interest,
        total_amount: input.principal + interest,
    })
}

/// Calculate compound interest: `total = P * (1 + r/n)^(n*t)`.
pub fn compound(
    input: &InterestInput,
    frequency: CompoundingFrequency,
) -> ToolResult<InterestResult> {
    input.validate()?;

    let rate = input.annual_rate_percent / 100.0;
    let n = frequency.periods_per_year();
    let total = input.principal * (1.0 + rate / n).powf(n * input.term_years);

    if !total.is_finite() {
        return Err(ToolError::invalid_input(
            "term_years",
            input.term_years.to_string(),
            "Compound interest overflowed to a non-finite value",
        ));
    }

    Ok(InterestResult {
        interest: total - input.principal,
        total_amount: total,
    })
}
