//! # Error Types
//!
//! Structured error types for toolkit_core. Every calculation and conversion
//! function signals failure through these types rather than panicking, so
//! front-ends can pattern-match and show a specific message inline.
//!
//! ## Example
//!
//! ```rust
//! use toolkit_core::errors::{ToolError, ToolResult};
//!
//! fn validate_principal(principal: f64) -> ToolResult<()> {
//!     if principal <= 0.0 {
//!         return Err(ToolError::InvalidInput {
//!             field: "principal".to_string(),
//!             value: principal.to_string(),
//!             reason: "Principal must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for toolkit_core operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Structured error type for calculator and converter operations.
///
/// Each variant carries enough context for a front-end to render a precise
/// inline validation message without string-parsing the error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ToolError {
    /// An input value is invalid (out of range, non-finite, mathematically undefined)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Requested unit id is not registered in the requested category
    #[error("Unknown unit '{unit_id}' in category '{category}'")]
    UnknownUnit { category: String, unit_id: String },

    /// Currency code not present in the catalog or rate table
    #[error("Currency not found: {code}")]
    CurrencyNotFound { code: String },

    /// IANA timezone id not recognized
    #[error("Timezone not found: {zone_id}")]
    TimezoneNotFound { zone_id: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ToolError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ToolError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ToolError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, unit_id: impl Into<String>) -> Self {
        ToolError::UnknownUnit {
            category: category.into(),
            unit_id: unit_id.into(),
        }
    }

    /// Create a CurrencyNotFound error
    pub fn currency_not_found(code: impl Into<String>) -> Self {
        ToolError::CurrencyNotFound { code: code.into() }
    }

    /// Create a TimezoneNotFound error
    pub fn timezone_not_found(zone_id: impl Into<String>) -> Self {
        ToolError::TimezoneNotFound {
            zone_id: zone_id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::InvalidInput { .. } => "INVALID_INPUT",
            ToolError::MissingField { .. } => "MISSING_FIELD",
            ToolError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ToolError::CurrencyNotFound { .. } => "CURRENCY_NOT_FOUND",
            ToolError::TimezoneNotFound { .. } => "TIMEZONE_NOT_FOUND",
            ToolError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Transport-level failure for the remote-data boundary (currency rates,
/// timezone list). Deliberately separate from [`ToolError`]: callers are
/// expected to recover with a static fallback table rather than surface it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Fetch failed for {resource}: {reason}")]
pub struct FetchError {
    pub resource: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ToolError::invalid_input("principal", "-500", "Principal must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ToolError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ToolError::missing_field("amount").error_code(), "MISSING_FIELD");
        assert_eq!(
            ToolError::unknown_unit("length", "furlong").error_code(),
            "UNKNOWN_UNIT"
        );
        assert_eq!(ToolError::currency_not_found("XXX").error_code(), "CURRENCY_NOT_FOUND");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::new("currency rates", "connection refused");
        assert!(err.to_string().contains("currency rates"));
    }
}
