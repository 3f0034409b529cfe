//! Error types with diagnostic codes
//!
//! Geometry queries never fail: degenerate input is normalized where it is
//! found. The errors here come from the few places that validate caller
//! supplied numbers before they enter a figure.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Numeric Errors
// ============================================================================

/// A raw number that cannot be used as a coordinate or extent
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    #[diagnostic(code(figura::numeric::nan))]
    NaN,

    #[error("value is infinite")]
    #[diagnostic(code(figura::numeric::infinite))]
    Infinite,

    #[error("value is negative")]
    #[diagnostic(code(figura::numeric::negative))]
    Negative,
}

impl NumericError {
    /// Check that `value` is finite.
    pub fn check_finite(value: f64) -> Result<f64, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(value)
        }
    }

    /// Check that `value` is finite and not below zero.
    pub fn check_non_negative(value: f64) -> Result<f64, NumericError> {
        let value = Self::check_finite(value)?;
        if value < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(value)
        }
    }
}

// ============================================================================
// Attribute Errors
// ============================================================================

/// A value rejected by the attribute store
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AttributeError {
    #[error("invalid stroke width {value}: {source}")]
    #[diagnostic(
        code(figura::attribute::invalid_stroke_width),
        help("stroke width must be a finite number >= 0")
    )]
    InvalidStrokeWidth {
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("miter limit {value} is below 1.0")]
    #[diagnostic(
        code(figura::attribute::miter_limit_too_small),
        help("a miter can never be shorter than the stroke is wide; use 1.0 to always bevel")
    )]
    MiterLimitTooSmall { value: f64 },

    #[error("invalid inner width factor {value}: {source}")]
    #[diagnostic(
        code(figura::attribute::invalid_inner_width_factor),
        help("the gap between double strokes must be a finite number >= 0")
    )]
    InvalidInnerWidthFactor {
        value: f64,
        #[source]
        source: NumericError,
    },
}
