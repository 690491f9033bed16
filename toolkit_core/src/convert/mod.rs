//! # Unit Conversion Engine
//!
//! Table-driven conversion across six categories. The five linear
//! categories (length, weight, area, volume, speed) share one code path:
//! every unit carries a scale factor to the category's SI base unit, so
//! any pair converts as `value * from_factor / to_factor` with no per-pair
//! table. Temperature is affine and pivots through Celsius instead.
//!
//! ## Example
//!
//! ```rust
//! use toolkit_core::convert::{convert, list_units, UnitCategory};
//!
//! // Populate a selection UI
//! let units = list_units(UnitCategory::Speed);
//! assert_eq!(units[0].id, "mps");
//!
//! // Convert
//! let result = convert(UnitCategory::Speed, "kph", "mph", 100.0).unwrap();
//! assert!((result.output_value - 62.137).abs() < 0.01);
//! ```

pub mod catalog;
pub mod temperature;

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

pub use catalog::{list_units, ConversionUnit, UnitCategory};
pub use temperature::TempUnit;

/// Conversion results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "output_value": 62.13727366,
///   "formula": "100 kph × 0.6214 = mph"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionResult {
    pub output_value: f64,

    /// Human-readable description of the conversion applied
    pub formula: String,
}

fn find_unit(category: UnitCategory, id: &str) -> ToolResult<&'static ConversionUnit> {
    list_units(category)
        .iter()
        .find(|unit| unit.id == id)
        .ok_or_else(|| ToolError::unknown_unit(category.display_name(), id))
}

fn linear_factor(category: UnitCategory, unit: &ConversionUnit) -> ToolResult<f64> {
    unit.factor_to_base.ok_or_else(|| ToolError::Internal {
        message: format!(
            "unit '{}' in linear category '{}' has no scale factor",
            unit.id,
            category.display_name()
        ),
    })
}

/// Formula text for the linear path, showing the factor actually applied.
fn linear_formula(value: f64, from: &ConversionUnit, to: &ConversionUnit, applied: f64) -> String {
    if applied == 1.0 {
        format!("{} {} = {} {}", value, from.id, value, to.id)
    } else if applied < 1.0 {
        format!("{} {} ÷ {:.4} = {}", value, from.id, 1.0 / applied, to.id)
    } else {
        format!("{} {} × {:.4} = {}", value, from.id, applied, to.id)
    }
}

/// Convert `value` from one unit to another within a category.
///
/// # Returns
///
/// * `Ok(ConversionResult)` - Converted value with a display formula
/// * `Err(ToolError)` - `UnknownUnit` if either id is not registered in the
///   category, `InvalidInput` for a non-finite value
pub fn convert(
    category: UnitCategory,
    from_id: &str,
    to_id: &str,
    value: f64,
) -> ToolResult<ConversionResult> {
    let from = find_unit(category, from_id)?;
    let to = find_unit(category, to_id)?;

    if !value.is_finite() {
        return Err(ToolError::invalid_input(
            "value",
            value.to_string(),
            "Value must be a finite number",
        ));
    }

    // Same-unit conversion reads as identity, not "× 1.0000".
    if from.id == to.id {
        return Ok(ConversionResult {
            output_value: value,
            formula: format!("{} {} = {} {}", value, from.id, value, to.id),
        });
    }

    if category.is_linear() {
        let from_factor = linear_factor(category, from)?;
        let to_factor = linear_factor(category, to)?;
        let applied = from_factor / to_factor;
        Ok(ConversionResult {
            output_value: value * applied,
            formula: linear_formula(value, from, to, applied),
        })
    } else {
        let from_t = TempUnit::from_id(from.id)
            .ok_or_else(|| ToolError::unknown_unit(category.display_name(), from.id))?;
        let to_t = TempUnit::from_id(to.id)
            .ok_or_else(|| ToolError::unknown_unit(category.display_name(), to.id))?;
        Ok(ConversionResult {
            output_value: temperature::convert(from_t, to_t, value),
            formula: temperature::formula(from_t, to_t).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let result = convert(UnitCategory::Length, "km", "m", 2.5).unwrap();
        assert!((result.output_value - 2500.0).abs() < 1e-9);
        assert!(result.formula.contains("×"));
    }

    #[test]
    fn test_imperial_length() {
        let result = convert(UnitCategory::Length, "mi", "km", 1.0).unwrap();
        assert!((result.output_value - 1.609344).abs() < 1e-9);
    }

    #[test]
    fn test_weight_conversion() {
        let result = convert(UnitCategory::Weight, "lb", "kg", 10.0).unwrap();
        assert!((result.output_value - 4.5359237).abs() < 1e-9);
        assert!(result.formula.contains("÷"));
    }

    #[test]
    fn test_speed_conversion() {
        let result = convert(UnitCategory::Speed, "kph", "mph", 100.0).unwrap();
        assert!((result.output_value - 62.137).abs() < 0.01);
    }

    #[test]
    fn test_area_conversion() {
        let result = convert(UnitCategory::Area, "ha", "ac", 1.0).unwrap();
        assert!((result.output_value - 2.4710538).abs() < 1e-6);
    }

    #[test]
    fn test_temperature_conversion() {
        let result = convert(UnitCategory::Temperature, "f", "c", 212.0).unwrap();
        assert!((result.output_value - 100.0).abs() < 1e-9);
        assert_eq!(result.formula, "(°F - 32) × 5/9 = °C");
    }

    #[test]
    fn test_identity_conversion_every_unit() {
        for category in UnitCategory::ALL {
            for unit in list_units(category) {
                let result = convert(category, unit.id, unit.id, 42.5).unwrap();
                assert_eq!(result.output_value, 42.5, "identity broken for {}", unit.id);
                assert!(!result.formula.contains('×'));
                assert!(!result.formula.contains('÷'));
            }
        }
    }

    #[test]
    fn test_linear_roundtrip_every_pair() {
        for category in UnitCategory::ALL {
            if !category.is_linear() {
                continue;
            }
            let units = list_units(category);
            for a in units {
                for b in units {
                    let there = convert(category, a.id, b.id, 123.456).unwrap();
                    let back = convert(category, b.id, a.id, there.output_value).unwrap();
                    let error = (back.output_value - 123.456).abs() / 123.456;
                    assert!(error < 1e-12, "roundtrip {} -> {} drifted", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_temperature_roundtrip() {
        for x in [-100.0, 0.0, 37.0, 250.0] {
            let f = convert(UnitCategory::Temperature, "c", "f", x).unwrap();
            let back = convert(UnitCategory::Temperature, "f", "c", f.output_value).unwrap();
            assert!((back.output_value - x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equal_factor_units_read_as_identity() {
        // ml and cm³ share a factor; the formula should not show "× 1.0000".
        let result = convert(UnitCategory::Volume, "ml", "cm3", 7.0).unwrap();
        assert_eq!(result.output_value, 7.0);
        assert_eq!(result.formula, "7 ml = 7 cm3");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result = convert(UnitCategory::Length, "furlong", "m", 1.0);
        assert!(matches!(result, Err(ToolError::UnknownUnit { .. })));
    }

    #[test]
    fn test_unit_from_wrong_category_rejected() {
        // "kg" is a weight id; it is not registered under length.
        let result = convert(UnitCategory::Length, "kg", "m", 1.0);
        assert!(matches!(result, Err(ToolError::UnknownUnit { .. })));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let result = convert(UnitCategory::Length, "m", "km", f64::NAN);
        assert!(matches!(result, Err(ToolError::InvalidInput { .. })));
    }

    #[test]
    fn test_result_serialization() {
        let result = convert(UnitCategory::Length, "m", "ft", 1.0).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
