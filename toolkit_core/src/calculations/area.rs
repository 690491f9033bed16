//! # Area Calculator
//!
//! Closed-form area and perimeter for basic shapes. The shape is a closed
//! enum so every variant is handled exhaustively at compile time, rather than
//! a free-form string switch.
//!
//! Triangle perimeter is only reported when all three side lengths were
//! supplied; the sides are accepted as given, with no triangle-inequality
//! check and no consistency check against base/height.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{ToolError, ToolResult};

/// A shape with the dimensions needed for its area formula.
///
/// ## JSON Examples
///
/// ```json
/// { "shape": "Square", "side": 4.0 }
/// ```
///
/// ```json
/// { "shape": "Triangle", "base": 6.0, "height": 4.0, "sides": [5.0, 5.0, 6.0] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Shape {
    Square {
        side: f64,
    },
    Rectangle {
        length: f64,
        width: f64,
    },
    Circle {
        radius: f64,
    },
    Triangle {
        base: f64,
        height: f64,
        /// All three side lengths, when known. Enables the perimeter.
        #[serde(default)]
        sides: Option<[f64; 3]>,
    },
}

/// Area calculation results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaResult {
    pub area: f64,

    /// Absent for a triangle unless all three sides were supplied
    pub perimeter: Option<f64>,
}

fn require_positive(field: &str, value: f64) -> ToolResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ToolError::invalid_input(
            field,
            value.to_string(),
            "Dimension must be a positive number",
        ));
    }
    Ok(())
}

impl Shape {
    /// Validate that every supplied dimension is positive and finite.
    pub fn validate(&self) -> ToolResult<()> {
        match self {
            Shape::Square { side } => require_positive("side", *side),
            Shape::Rectangle { length, width } => {
                require_positive("length", *length)?;
                require_positive("width", *width)
            }
            Shape::Circle { radius } => require_positive("radius", *radius),
            Shape::Triangle { base, height, sides } => {
                require_positive("base", *base)?;
                require_positive("height", *height)?;
                if let Some([a, b, c]) = sides {
                    require_positive("side_a", *a)?;
                    require_positive("side_b", *b)?;
                    require_positive("side_c", *c)?;
                }
                Ok(())
            }
        }
    }
}

/// Calculate area and (where defined) perimeter for the given shape.
pub fn calculate(shape: &Shape) -> ToolResult<AreaResult> {
    shape.validate()?;

    let result = match shape {
        Shape::Square { side } => AreaResult {
            area: side * side,
            perimeter: Some(4.0 * side),
        },
        Shape::Rectangle { length, width } => AreaResult {
            area: length * width,
            perimeter: Some(2.0 * (length + width)),
        },
        Shape::Circle { radius } => AreaResult {
            area: PI * radius * radius,
            perimeter: Some(2.0 * PI * radius),
        },
        Shape::Triangle { base, height, sides } => AreaResult {
            area: 0.5 * base * height,
            perimeter: sides.map(|[a, b, c]| a + b + c),
        },
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let result = calculate(&Shape::Square { side: 4.0 }).unwrap();
        assert_eq!(result.area, 16.0);
        assert_eq!(result.perimeter, Some(16.0));
    }

    #[test]
    fn test_rectangle() {
        let result = calculate(&Shape::Rectangle {
            length: 5.0,
            width: 3.0,
        })
        .unwrap();
        assert_eq!(result.area, 15.0);
        assert_eq!(result.perimeter, Some(16.0));
    }

    #[test]
    fn test_circle() {
        let result = calculate(&Shape::Circle { radius: 2.0 }).unwrap();
        assert!((result.area - 12.566).abs() < 1e-3);
        let circumference = result.perimeter.unwrap();
        assert!((circumference - 12.566).abs() < 1e-3);
    }

    #[test]
    fn test_triangle_without_sides() {
        let result = calculate(&Shape::Triangle {
            base: 6.0,
            height: 4.0,
            sides: None,
        })
        .unwrap();
        assert_eq!(result.area, 12.0);
        assert_eq!(result.perimeter, None);
    }

    #[test]
    fn test_triangle_with_sides() {
        let result = calculate(&Shape::Triangle {
            base: 6.0,
            height: 4.0,
            sides: Some([5.0, 5.0, 6.0]),
        })
        .unwrap();
        assert_eq!(result.area, 12.0);
        assert_eq!(result.perimeter, Some(16.0));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let result = calculate(&Shape::Square { side: -4.0 });
        assert!(matches!(result, Err(ToolError::InvalidInput { .. })));
    }

    #[test]
    fn test_nan_dimension_rejected() {
        let result = calculate(&Shape::Circle { radius: f64::NAN });
        assert!(result.is_err());
    }

    #[test]
    fn test_shape_serialization() {
        let shape = Shape::Triangle {
            base: 6.0,
            height: 4.0,
            sides: None,
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("\"shape\":\"Triangle\""));
        let roundtrip: Shape = serde_json::from_str(&json).unwrap();
        assert!(matches!(roundtrip, Shape::Triangle { sides: None, .. }));
    }
}
