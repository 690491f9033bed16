//! # Unit Catalog
//!
//! The static unit registry: six categories, each a declaration-ordered
//! table of units. Five categories are linear (every unit carries a scale
//! factor to the category's SI base unit); temperature is affine and its
//! entries carry no factor.
//!
//! The tables are process-wide constants. They are never mutated at runtime
//! and the declaration order is the order selection UIs present.

use serde::{Deserialize, Serialize};

/// The six conversion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
}

impl UnitCategory {
    /// All categories in display order
    pub const ALL: [UnitCategory; 6] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Speed,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Area => "Area",
            UnitCategory::Volume => "Volume",
            UnitCategory::Speed => "Speed",
        }
    }

    /// Id of the base unit every linear factor is anchored to
    pub fn base_unit_id(&self) -> &'static str {
        match self {
            UnitCategory::Length => "m",
            UnitCategory::Weight => "kg",
            UnitCategory::Temperature => "c",
            UnitCategory::Area => "m2",
            UnitCategory::Volume => "l",
            UnitCategory::Speed => "mps",
        }
    }

    /// Linear categories convert by scale factor alone; temperature needs
    /// the affine formulas.
    pub fn is_linear(&self) -> bool {
        !matches!(self, UnitCategory::Temperature)
    }
}

/// One registered unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionUnit {
    /// Stable id used in conversion requests (e.g., "km")
    pub id: &'static str,

    /// Display label for selection UI (e.g., "Kilometers (km)")
    pub label: &'static str,

    /// Scale factor to the category base unit; absent for temperature
    pub factor_to_base: Option<f64>,
}

impl ConversionUnit {
    const fn linear(id: &'static str, label: &'static str, factor_to_base: f64) -> Self {
        Self {
            id,
            label,
            factor_to_base: Some(factor_to_base),
        }
    }

    const fn affine(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            factor_to_base: None,
        }
    }
}

// ============================================================================
// Category Tables
// ============================================================================

/// Length units, anchored to the meter
pub static LENGTH_UNITS: &[ConversionUnit] = &[
    ConversionUnit::linear("mm", "Millimeters (mm)", 0.001),
    ConversionUnit::linear("cm", "Centimeters (cm)", 0.01),
    ConversionUnit::linear("m", "Meters (m)", 1.0),
    ConversionUnit::linear("km", "Kilometers (km)", 1000.0),
    ConversionUnit::linear("in", "Inches (in)", 0.0254),
    ConversionUnit::linear("ft", "Feet (ft)", 0.3048),
    ConversionUnit::linear("yd", "Yards (yd)", 0.9144),
    ConversionUnit::linear("mi", "Miles (mi)", 1609.344),
];

/// Weight units, anchored to the kilogram
pub static WEIGHT_UNITS: &[ConversionUnit] = &[
    ConversionUnit::linear("mg", "Milligrams (mg)", 0.000001),
    ConversionUnit::linear("g", "Grams (g)", 0.001),
    ConversionUnit::linear("kg", "Kilograms (kg)", 1.0),
    ConversionUnit::linear("t", "Metric Tons (t)", 1000.0),
    ConversionUnit::linear("oz", "Ounces (oz)", 0.02834952),
    ConversionUnit::linear("lb", "Pounds (lb)", 0.45359237),
    ConversionUnit::linear("st", "Stone (st)", 6.35029),
];

/// Temperature units; conversions go through the Celsius pivot
pub static TEMPERATURE_UNITS: &[ConversionUnit] = &[
    ConversionUnit::affine("c", "Celsius (°C)"),
    ConversionUnit::affine("f", "Fahrenheit (°F)"),
    ConversionUnit::affine("k", "Kelvin (K)"),
];

/// Area units, anchored to the square meter
pub static AREA_UNITS: &[ConversionUnit] = &[
    ConversionUnit::linear("mm2", "Square Millimeters (mm²)", 0.000001),
    ConversionUnit::linear("cm2", "Square Centimeters (cm²)", 0.0001),
    ConversionUnit::linear("m2", "Square Meters (m²)", 1.0),
    ConversionUnit::linear("ha", "Hectares (ha)", 10000.0),
    ConversionUnit::linear("km2", "Square Kilometers (km²)", 1000000.0),
    ConversionUnit::linear("in2", "Square Inches (in²)", 0.00064516),
    ConversionUnit::linear("ft2", "Square Feet (ft²)", 0.09290304),
    ConversionUnit::linear("yd2", "Square Yards (yd²)", 0.83612736),
    ConversionUnit::linear("ac", "Acres (ac)", 4046.8564224),
    ConversionUnit::linear("mi2", "Square Miles (mi²)", 2589988.110336),
];

/// Volume units, anchored to the liter
pub static VOLUME_UNITS: &[ConversionUnit] = &[
    ConversionUnit::linear("ml", "Milliliters (ml)", 0.001),
    ConversionUnit::linear("l", "Liters (l)", 1.0),
    ConversionUnit::linear("cm3", "Cubic Centimeters (cm³)", 0.001),
    ConversionUnit::linear("m3", "Cubic Meters (m³)", 1000.0),
    ConversionUnit::linear("gal_us", "US Gallons (gal)", 3.78541),
    ConversionUnit::linear("gal_uk", "UK Gallons (gal)", 4.54609),
    ConversionUnit::linear("qt", "Quarts (qt)", 0.946353),
    ConversionUnit::linear("pt", "Pints (pt)", 0.473176),
    ConversionUnit::linear("fl_oz", "Fluid Ounces (fl oz)", 0.0295735),
    ConversionUnit::linear("cup", "Cups (cup)", 0.24),
];

/// Speed units, anchored to meters per second
pub static SPEED_UNITS: &[ConversionUnit] = &[
    ConversionUnit::linear("mps", "Meters per Second (m/s)", 1.0),
    ConversionUnit::linear("kph", "Kilometers per Hour (km/h)", 0.277778),
    ConversionUnit::linear("mph", "Miles per Hour (mph)", 0.44704),
    ConversionUnit::linear("knot", "Knots (kn)", 0.514444),
    ConversionUnit::linear("fts", "Feet per Second (ft/s)", 0.3048),
];

/// All registered units for a category, in stable declaration order.
pub fn list_units(category: UnitCategory) -> &'static [ConversionUnit] {
    match category {
        UnitCategory::Length => LENGTH_UNITS,
        UnitCategory::Weight => WEIGHT_UNITS,
        UnitCategory::Temperature => TEMPERATURE_UNITS,
        UnitCategory::Area => AREA_UNITS,
        UnitCategory::Volume => VOLUME_UNITS,
        UnitCategory::Speed => SPEED_UNITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(list_units(UnitCategory::Length).len(), 8);
        assert_eq!(list_units(UnitCategory::Weight).len(), 7);
        assert_eq!(list_units(UnitCategory::Temperature).len(), 3);
        assert_eq!(list_units(UnitCategory::Area).len(), 10);
        assert_eq!(list_units(UnitCategory::Volume).len(), 10);
        assert_eq!(list_units(UnitCategory::Speed).len(), 5);
    }

    #[test]
    fn test_every_linear_category_anchors_at_one() {
        for category in UnitCategory::ALL {
            if !category.is_linear() {
                continue;
            }
            let base = list_units(category)
                .iter()
                .find(|u| u.id == category.base_unit_id())
                .expect("base unit registered");
            assert_eq!(base.factor_to_base, Some(1.0));
        }
    }

    #[test]
    fn test_temperature_units_have_no_factor() {
        for unit in list_units(UnitCategory::Temperature) {
            assert!(unit.factor_to_base.is_none());
        }
    }

    #[test]
    fn test_unit_ids_unique_per_category() {
        for category in UnitCategory::ALL {
            let units = list_units(category);
            for (i, a) in units.iter().enumerate() {
                for b in &units[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id in {:?}", category);
                }
            }
        }
    }

    #[test]
    fn test_factors_positive_and_finite() {
        for category in UnitCategory::ALL {
            for unit in list_units(category) {
                if let Some(factor) = unit.factor_to_base {
                    assert!(factor.is_finite() && factor > 0.0, "bad factor for {}", unit.id);
                }
            }
        }
    }
}
