//! The six pairwise conversions.
//!
//! Every function validates its inputs first and then returns a fresh
//! `[f64; 4]` in the target format's field order. Bounds against the image
//! are only enforced when entering YOLO: a box that does not fit inside the
//! image cannot be normalized. Leaving YOLO only checks that the normalized
//! values are in range.

use super::validate::{validate_non_negative, validate_numeric, validate_size};
use super::{CocoBox, ImageSize, PascalBox, YoloBox};
use crate::error::ConvertError;

/// Pascal `(x_min, y_min, x_max, y_max)` to COCO `(x_min, y_min, width, height)`.
pub fn pascal_to_coco(
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
) -> Result<[f64; 4], ConvertError> {
    let fields = pascal_fields(x_min, y_min, x_max, y_max);
    validate_numeric(&fields)?;
    validate_non_negative(&fields)?;
    check_pascal_order(x_min, y_min, x_max, y_max)?;

    Ok([x_min, y_min, x_max - x_min, y_max - y_min])
}

/// Pascal corners to a normalized YOLO box. The box must fit inside `size`.
pub fn pascal_to_yolo(
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    size: ImageSize,
) -> Result<[f64; 4], ConvertError> {
    let fields = pascal_fields(x_min, y_min, x_max, y_max);
    validate_numeric(&fields)?;
    validate_size(size)?;
    validate_non_negative(&fields)?;
    check_pascal_order(x_min, y_min, x_max, y_max)?;
    if x_max > size.width || y_max > size.height {
        return Err(out_of_bounds(size));
    }

    // Halve before adding so corners near f64::MAX cannot overflow the midpoint.
    let ImageSize { width, height } = size;
    Ok([
        (x_min / 2.0 + x_max / 2.0) / width,
        (y_min / 2.0 + y_max / 2.0) / height,
        (x_max - x_min) / width,
        (y_max - y_min) / height,
    ])
}

/// COCO origin + extent to Pascal corners.
pub fn coco_to_pascal(
    x_min: f64,
    y_min: f64,
    width: f64,
    height: f64,
) -> Result<[f64; 4], ConvertError> {
    let fields = coco_fields(x_min, y_min, width, height);
    validate_numeric(&fields)?;
    validate_non_negative(&fields)?;
    check_coco_extent(width, height)?;

    Ok([x_min, y_min, x_min + width, y_min + height])
}

/// COCO origin + extent to a normalized YOLO box. The box must fit inside `size`.
pub fn coco_to_yolo(
    x_min: f64,
    y_min: f64,
    width: f64,
    height: f64,
    size: ImageSize,
) -> Result<[f64; 4], ConvertError> {
    let fields = coco_fields(x_min, y_min, width, height);
    validate_numeric(&fields)?;
    validate_size(size)?;
    validate_non_negative(&fields)?;
    check_coco_extent(width, height)?;
    if x_min + width > size.width || y_min + height > size.height {
        return Err(out_of_bounds(size));
    }

    Ok([
        (x_min + width / 2.0) / size.width,
        (y_min + height / 2.0) / size.height,
        width / size.width,
        height / size.height,
    ])
}

/// Normalized YOLO box to COCO origin + extent in pixels.
pub fn yolo_to_coco(
    x_center: f64,
    y_center: f64,
    r_width: f64,
    r_height: f64,
    size: ImageSize,
) -> Result<[f64; 4], ConvertError> {
    let (x_min, y_min, width, height) = denormalize(x_center, y_center, r_width, r_height, size)?;
    Ok([x_min, y_min, width, height])
}

/// Normalized YOLO box to Pascal corners in pixels.
pub fn yolo_to_pascal(
    x_center: f64,
    y_center: f64,
    r_width: f64,
    r_height: f64,
    size: ImageSize,
) -> Result<[f64; 4], ConvertError> {
    let (x_min, y_min, width, height) = denormalize(x_center, y_center, r_width, r_height, size)?;
    Ok([x_min, y_min, x_min + width, y_min + height])
}

fn pascal_fields(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> [(&'static str, f64); 4] {
    [
        ("x_min", x_min),
        ("y_min", y_min),
        ("x_max", x_max),
        ("y_max", y_max),
    ]
}

fn coco_fields(x_min: f64, y_min: f64, width: f64, height: f64) -> [(&'static str, f64); 4] {
    [
        ("x_min", x_min),
        ("y_min", y_min),
        ("width", width),
        ("height", height),
    ]
}

fn check_pascal_order(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<(), ConvertError> {
    if x_max <= x_min || y_max <= y_min {
        return Err(ConvertError::InvalidBox {
            format: "Pascal",
            message: format!(
                "x_max must exceed x_min and y_max must exceed y_min, got ({x_min}, {y_min}, {x_max}, {y_max})"
            ),
        });
    }
    Ok(())
}

fn check_coco_extent(width: f64, height: f64) -> Result<(), ConvertError> {
    if width <= 0.0 || height <= 0.0 {
        return Err(ConvertError::InvalidBox {
            format: "COCO",
            message: format!("width and height must be positive, got {width}x{height}"),
        });
    }
    Ok(())
}

fn out_of_bounds(size: ImageSize) -> ConvertError {
    ConvertError::OutOfBounds {
        width: size.width,
        height: size.height,
    }
}

/// Shared YOLO decoding: returns `(x_min, y_min, width, height)` in pixels.
fn denormalize(
    x_center: f64,
    y_center: f64,
    r_width: f64,
    r_height: f64,
    size: ImageSize,
) -> Result<(f64, f64, f64, f64), ConvertError> {
    validate_numeric(&[
        ("x_center", x_center),
        ("y_center", y_center),
        ("width", r_width),
        ("height", r_height),
    ])?;
    validate_size(size)?;

    let unit = 0.0..=1.0;
    if !(unit.contains(&x_center) && unit.contains(&y_center)) {
        return Err(ConvertError::CenterOutOfRange { x_center, y_center });
    }
    if !(r_width > 0.0 && r_width <= 1.0 && r_height > 0.0 && r_height <= 1.0) {
        return Err(ConvertError::InvalidExtent {
            width: r_width,
            height: r_height,
        });
    }

    let width = r_width * size.width;
    let height = r_height * size.height;
    let x_min = x_center * size.width - width / 2.0;
    let y_min = y_center * size.height - height / 2.0;
    Ok((x_min, y_min, width, height))
}

impl PascalBox {
    pub fn to_coco(&self) -> Result<CocoBox, ConvertError> {
        pascal_to_coco(self.x_min, self.y_min, self.x_max, self.y_max).map(CocoBox::from)
    }

    pub fn to_yolo(&self, size: ImageSize) -> Result<YoloBox, ConvertError> {
        pascal_to_yolo(self.x_min, self.y_min, self.x_max, self.y_max, size).map(YoloBox::from)
    }
}

impl CocoBox {
    pub fn to_pascal(&self) -> Result<PascalBox, ConvertError> {
        coco_to_pascal(self.x_min, self.y_min, self.width, self.height).map(PascalBox::from)
    }

    pub fn to_yolo(&self, size: ImageSize) -> Result<YoloBox, ConvertError> {
        coco_to_yolo(self.x_min, self.y_min, self.width, self.height, size).map(YoloBox::from)
    }
}

impl YoloBox {
    pub fn to_pascal(&self, size: ImageSize) -> Result<PascalBox, ConvertError> {
        yolo_to_pascal(self.x_center, self.y_center, self.width, self.height, size)
            .map(PascalBox::from)
    }

    pub fn to_coco(&self, size: ImageSize) -> Result<CocoBox, ConvertError> {
        yolo_to_coco(self.x_center, self.y_center, self.width, self.height, size)
            .map(CocoBox::from)
    }
}
