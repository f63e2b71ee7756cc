//! Guards run at the top of every conversion, before any arithmetic.
//!
//! Each guard takes `(field_name, value)` pairs so the error can name the
//! offending argument.

use super::ImageSize;
use crate::error::ConvertError;

/// Fails with a type error unless every value is a finite number.
pub fn validate_numeric(fields: &[(&'static str, f64)]) -> Result<(), ConvertError> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(ConvertError::NonNumeric {
            field: field.to_string(),
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}

/// Fails with a value error unless both dimensions are finite and positive.
pub fn validate_size(size: ImageSize) -> Result<(), ConvertError> {
    let positive = |dim: f64| dim.is_finite() && dim > 0.0;
    if positive(size.width) && positive(size.height) {
        Ok(())
    } else {
        Err(ConvertError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}

/// Fails with a value error if any value is negative.
pub fn validate_non_negative(fields: &[(&'static str, f64)]) -> Result<(), ConvertError> {
    match fields.iter().find(|(_, value)| *value < 0.0) {
        Some(&(field, value)) => Err(ConvertError::Negative { field, value }),
        None => Ok(()),
    }
}
