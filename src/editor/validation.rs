//! Numeric field validation

use thiserror::Error;

use crate::constants::limits;

/// Raw text that is not an integer inside the allowed bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("must be an integer between {min} and {max}.")]
pub struct RangeError {
    pub min: u32,
    pub max: u32,
}

/// A `RangeError` attributed to a named form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {source}")]
pub struct ValidationError {
    pub field: &'static str,
    pub source: RangeError,
}

/// Parse `raw` as an integer in `[min, max]`
///
/// Surrounding whitespace is ignored. Anything that is not a plain
/// non-negative integer is rejected the same way as an out-of-range value.
pub fn validate_int(raw: &str, min: u32, max: u32) -> Result<u32, RangeError> {
    let err = RangeError { min, max };
    let value: u32 = raw.trim().parse().map_err(|_| err)?;

    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(err)
    }
}

/// An integer form field with its label and bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericField {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
}

impl NumericField {
    pub const FACE_SIZE: Self = Self::new("Face Size", limits::FACE_SIZE);
    pub const TEXT_SIZE: Self = Self::new("Text Size", limits::TEXT_SIZE);
    pub const PERCENTAGE: Self = Self::new("Percentage", limits::PERCENTAGE);

    const fn new(label: &'static str, (min, max): (u32, u32)) -> Self {
        Self { label, min, max }
    }

    pub fn validate(&self, raw: &str) -> Result<u32, ValidationError> {
        validate_int(raw, self.min, self.max).map_err(|source| ValidationError {
            field: self.label,
            source,
        })
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}
