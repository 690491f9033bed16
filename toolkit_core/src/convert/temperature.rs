//! # Temperature Conversion
//!
//! Celsius, Fahrenheit, and Kelvin relate by affine transforms (scale plus
//! offset), so they cannot share the linear scale-factor path. Every
//! conversion pivots through Celsius: source unit to Celsius, then Celsius
//! to target unit.
//!
//! The formula strings shown to users come from a fixed per-pair table.

use serde::{Deserialize, Serialize};

/// A temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    /// Parse a catalog unit id ("c", "f", "k").
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "c" => Some(TempUnit::Celsius),
            "f" => Some(TempUnit::Fahrenheit),
            "k" => Some(TempUnit::Kelvin),
            _ => None,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TempUnit::Celsius => value,
            TempUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TempUnit::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TempUnit::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert a temperature via the Celsius pivot.
pub fn convert(from: TempUnit, to: TempUnit, value: f64) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

/// Display formula for a from/to pair.
pub fn formula(from: TempUnit, to: TempUnit) -> &'static str {
    use TempUnit::*;
    match (from, to) {
        (Celsius, Celsius) => "°C = °C",
        (Celsius, Fahrenheit) => "(°C × 9/5) + 32 = °F",
        (Celsius, Kelvin) => "°C + 273.15 = K",
        (Fahrenheit, Celsius) => "(°F - 32) × 5/9 = °C",
        (Fahrenheit, Fahrenheit) => "°F = °F",
        (Fahrenheit, Kelvin) => "(°F - 32) × 5/9 + 273.15 = K",
        (Kelvin, Celsius) => "K - 273.15 = °C",
        (Kelvin, Fahrenheit) => "(K - 273.15) × 9/5 + 32 = °F",
        (Kelvin, Kelvin) => "K = K",
    }
}
