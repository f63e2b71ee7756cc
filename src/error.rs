use std::fmt;

use thiserror::Error;

/// The two classes of conversion failure.
///
/// `Type` covers arguments of the wrong type or shape (a non-numeric
/// coordinate, a malformed size pair, a missing size). `Value` covers
/// arguments of the right shape but an invalid meaning (negative coordinate,
/// degenerate box, out-of-range normalized value, unsupported pair).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => f.write_str("type error"),
            ErrorKind::Value => f.write_str("value error"),
        }
    }
}

/// Errors raised by the conversion core.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConvertError {
    #[error("all arguments must be numeric ({field} = {value})")]
    NonNumeric { field: String, value: String },

    #[error("size must be a pair of two dimensions: {0}")]
    MalformedSize(String),

    #[error("expected 4 coordinates, found {found}")]
    WrongArity { found: usize },

    #[error("malformed request: expected FROM TO X1 Y1 X2 Y2 [WxH], found {found} token(s)")]
    MalformedRequest { found: usize },

    #[error("conversion from {from} to {to} requires an image size")]
    MissingSize { from: String, to: String },

    #[error("conversion from {from} to {to} does not take an image size")]
    UnexpectedSize { from: String, to: String },

    #[error("image dimensions must be positive numbers, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("all arguments must be non-negative ({field} = {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("invalid {format} bounding box: {message}")]
    InvalidBox {
        format: &'static str,
        message: String,
    },

    #[error("bounding box extends beyond image dimensions {width}x{height}")]
    OutOfBounds { width: f64, height: f64 },

    #[error("center coordinates must be between 0 and 1, got ({x_center}, {y_center})")]
    CenterOutOfRange { x_center: f64, y_center: f64 },

    #[error("invalid YOLO bounding box dimensions: width and height must be in (0, 1], got {width}x{height}")]
    InvalidExtent { width: f64, height: f64 },

    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: String, to: String },
}

impl ConvertError {
    /// Which of the two error classes this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::NonNumeric { .. }
            | ConvertError::MalformedSize(_)
            | ConvertError::WrongArity { .. }
            | ConvertError::MalformedRequest { .. }
            | ConvertError::MissingSize { .. }
            | ConvertError::UnexpectedSize { .. } => ErrorKind::Type,
            ConvertError::InvalidSize { .. }
            | ConvertError::Negative { .. }
            | ConvertError::InvalidBox { .. }
            | ConvertError::OutOfBounds { .. }
            | ConvertError::CenterOutOfRange { .. }
            | ConvertError::InvalidExtent { .. }
            | ConvertError::UnsupportedConversion { .. } => ErrorKind::Value,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::Type`.
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Shorthand for `self.kind() == ErrorKind::Value`.
    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

/// The main error type for the bboxconv CLI.
#[derive(Debug, Error)]
pub enum BboxconvError {
    #[error("{kind}: {0}", kind = .0.kind())]
    Convert(#[from] ConvertError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write JSON report: {0}")]
    JsonWrite(#[source] serde_json::Error),
}
