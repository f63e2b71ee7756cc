//! Bounding-box format tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three supported bounding-box conventions.
///
/// Tags are case-sensitive: only `"pascal"`, `"coco"` and `"yolo"` parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxFormat {
    /// Pascal-VOC: `(x_min, y_min, x_max, y_max)` in pixels.
    Pascal,
    /// COCO: `(x_min, y_min, width, height)` in pixels.
    Coco,
    /// YOLO: `(x_center, y_center, width, height)` normalized to `[0, 1]`.
    Yolo,
}

impl BoxFormat {
    /// All formats, in declaration order.
    pub const ALL: [BoxFormat; 3] = [BoxFormat::Pascal, BoxFormat::Coco, BoxFormat::Yolo];

    /// The string tag for this format.
    pub fn name(&self) -> &'static str {
        match self {
            BoxFormat::Pascal => "pascal",
            BoxFormat::Coco => "coco",
            BoxFormat::Yolo => "yolo",
        }
    }

    /// Whether coordinates in this format are normalized to the image size.
    pub fn is_normalized(&self) -> bool {
        matches!(self, BoxFormat::Yolo)
    }

    /// Names of the four coordinates, in positional order.
    pub fn field_names(&self) -> [&'static str; 4] {
        match self {
            BoxFormat::Pascal => ["x_min", "y_min", "x_max", "y_max"],
            BoxFormat::Coco => ["x_min", "y_min", "width", "height"],
            BoxFormat::Yolo => ["x_center", "y_center", "width", "height"],
        }
    }
}

impl fmt::Display for BoxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not one of the known format tags.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown bounding-box format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for BoxFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pascal" => Ok(BoxFormat::Pascal),
            "coco" => Ok(BoxFormat::Coco),
            "yolo" => Ok(BoxFormat::Yolo),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
