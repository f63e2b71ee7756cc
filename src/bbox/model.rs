//! Value types for the three box conventions and the image size.
//!
//! Construction is permissive: a `PascalBox` with `x_max < x_min` or a
//! `YoloBox` with a center of 3.0 can be represented. The conversion
//! functions are responsible for rejecting them.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// A Pascal-VOC box: two absolute corners in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PascalBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl PascalBox {
    #[inline]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns `[x_min, y_min, x_max, y_max]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// Returns true if the box lies entirely inside `[0, W] x [0, H]`.
    pub fn is_within(&self, size: ImageSize) -> bool {
        self.x_min >= 0.0
            && self.y_min >= 0.0
            && self.x_max <= size.width
            && self.y_max <= size.height
    }
}

impl From<[f64; 4]> for PascalBox {
    fn from([x_min, y_min, x_max, y_max]: [f64; 4]) -> Self {
        Self::new(x_min, y_min, x_max, y_max)
    }
}

/// A COCO box: absolute top-left origin plus extent, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoBox {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

impl CocoBox {
    #[inline]
    pub fn new(x_min: f64, y_min: f64, width: f64, height: f64) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    /// Returns `[x_min, y_min, width, height]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.width, self.height]
    }

    /// Returns true if the box lies entirely inside `[0, W] x [0, H]`.
    pub fn is_within(&self, size: ImageSize) -> bool {
        self.x_min >= 0.0
            && self.y_min >= 0.0
            && self.x_min + self.width <= size.width
            && self.y_min + self.height <= size.height
    }
}

impl From<[f64; 4]> for CocoBox {
    fn from([x_min, y_min, width, height]: [f64; 4]) -> Self {
        Self::new(x_min, y_min, width, height)
    }
}

/// A YOLO box: center and extent, each normalized by the image size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YoloBox {
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl YoloBox {
    #[inline]
    pub fn new(x_center: f64, y_center: f64, width: f64, height: f64) -> Self {
        Self {
            x_center,
            y_center,
            width,
            height,
        }
    }

    /// Returns `[x_center, y_center, width, height]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_center, self.y_center, self.width, self.height]
    }
}

impl From<[f64; 4]> for YoloBox {
    fn from([x_center, y_center, width, height]: [f64; 4]) -> Self {
        Self::new(x_center, y_center, width, height)
    }
}

/// Image dimensions in pixels, as `(max_width, max_height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

impl TryFrom<&[f64]> for ImageSize {
    type Error = ConvertError;

    /// Builds a size from an ordered pair; any other length is a type error.
    fn try_from(dims: &[f64]) -> Result<Self, Self::Error> {
        match dims {
            [width, height] => Ok(Self::new(*width, *height)),
            _ => Err(ConvertError::MalformedSize(format!(
                "expected 2 dimensions, found {}",
                dims.len()
            ))),
        }
    }
}
