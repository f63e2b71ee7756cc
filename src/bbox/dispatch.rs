//! Routing from a `(from, to)` format pair to the pairwise conversion.
//!
//! The router does no arithmetic. It resolves the route, checks that the
//! caller supplied the right argument shape for it, and forwards.

use super::convert::{
    coco_to_pascal, coco_to_yolo, pascal_to_coco, pascal_to_yolo, yolo_to_coco, yolo_to_pascal,
};
use super::{BoxFormat, ImageSize};
use crate::error::ConvertError;

/// A resolved conversion between two distinct formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    PascalToCoco,
    PascalToYolo,
    CocoToPascal,
    CocoToYolo,
    YoloToPascal,
    YoloToCoco,
}

impl Route {
    /// Every supported route.
    pub const ALL: [Route; 6] = [
        Route::PascalToCoco,
        Route::PascalToYolo,
        Route::CocoToPascal,
        Route::CocoToYolo,
        Route::YoloToPascal,
        Route::YoloToCoco,
    ];

    /// Source format of this route.
    pub fn from_format(&self) -> BoxFormat {
        match self {
            Route::PascalToCoco | Route::PascalToYolo => BoxFormat::Pascal,
            Route::CocoToPascal | Route::CocoToYolo => BoxFormat::Coco,
            Route::YoloToPascal | Route::YoloToCoco => BoxFormat::Yolo,
        }
    }

    /// Target format of this route.
    pub fn to_format(&self) -> BoxFormat {
        match self {
            Route::CocoToPascal | Route::YoloToPascal => BoxFormat::Pascal,
            Route::PascalToCoco | Route::YoloToCoco => BoxFormat::Coco,
            Route::PascalToYolo | Route::CocoToYolo => BoxFormat::Yolo,
        }
    }

    /// True when the route enters or leaves the normalized representation.
    pub fn requires_size(&self) -> bool {
        self.from_format().is_normalized() || self.to_format().is_normalized()
    }

    /// Run the conversion for this route.
    ///
    /// `size` must be `Some` exactly when [`Route::requires_size`] is true;
    /// otherwise a type error is returned.
    pub fn apply(&self, coords: [f64; 4], size: Option<ImageSize>) -> Result<[f64; 4], ConvertError> {
        let [a, b, c, d] = coords;
        match (self, size) {
            (Route::PascalToCoco, None) => pascal_to_coco(a, b, c, d),
            (Route::CocoToPascal, None) => coco_to_pascal(a, b, c, d),
            (Route::PascalToYolo, Some(size)) => pascal_to_yolo(a, b, c, d, size),
            (Route::CocoToYolo, Some(size)) => coco_to_yolo(a, b, c, d, size),
            (Route::YoloToPascal, Some(size)) => yolo_to_pascal(a, b, c, d, size),
            (Route::YoloToCoco, Some(size)) => yolo_to_coco(a, b, c, d, size),
            (_, None) => Err(ConvertError::MissingSize {
                from: self.from_format().to_string(),
                to: self.to_format().to_string(),
            }),
            (_, Some(_)) => Err(ConvertError::UnexpectedSize {
                from: self.from_format().to_string(),
                to: self.to_format().to_string(),
            }),
        }
    }
}

/// Resolve a format pair to its route. Same-format pairs have none.
pub fn route(from: BoxFormat, to: BoxFormat) -> Option<Route> {
    match (from, to) {
        (BoxFormat::Pascal, BoxFormat::Coco) => Some(Route::PascalToCoco),
        (BoxFormat::Pascal, BoxFormat::Yolo) => Some(Route::PascalToYolo),
        (BoxFormat::Coco, BoxFormat::Pascal) => Some(Route::CocoToPascal),
        (BoxFormat::Coco, BoxFormat::Yolo) => Some(Route::CocoToYolo),
        (BoxFormat::Yolo, BoxFormat::Pascal) => Some(Route::YoloToPascal),
        (BoxFormat::Yolo, BoxFormat::Coco) => Some(Route::YoloToCoco),
        (BoxFormat::Pascal, BoxFormat::Pascal)
        | (BoxFormat::Coco, BoxFormat::Coco)
        | (BoxFormat::Yolo, BoxFormat::Yolo) => None,
    }
}

/// Convert `coords` from one format to another.
///
/// `coords` must hold exactly four values in the source format's field
/// order. `size` is required for routes touching YOLO and rejected for the
/// others.
pub fn convert(
    from: BoxFormat,
    to: BoxFormat,
    coords: &[f64],
    size: Option<ImageSize>,
) -> Result<[f64; 4], ConvertError> {
    let route = route(from, to).ok_or_else(|| unsupported(from.name(), to.name()))?;
    let coords: [f64; 4] = coords
        .try_into()
        .map_err(|_| ConvertError::WrongArity {
            found: coords.len(),
        })?;
    route.apply(coords, size)
}

/// String-tag entry point. Tags are case-sensitive; unknown tags are
/// reported the same way as unsupported pairs.
pub fn convert_bbox(
    from: &str,
    to: &str,
    coords: &[f64],
    size: Option<ImageSize>,
) -> Result<[f64; 4], ConvertError> {
    match (from.parse::<BoxFormat>(), to.parse::<BoxFormat>()) {
        (Ok(from), Ok(to)) => convert(from, to, coords, size),
        _ => Err(unsupported(from, to)),
    }
}

fn unsupported(from: &str, to: &str) -> ConvertError {
    ConvertError::UnsupportedConversion {
        from: from.to_string(),
        to: to.to_string(),
    }
}
