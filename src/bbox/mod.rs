//! Bounding-box conversion between Pascal-VOC, COCO and YOLO.
//!
//! # Conventions
//!
//! | Format | Fields | Space |
//! |---|---|---|
//! | [`BoxFormat::Pascal`] | `x_min, y_min, x_max, y_max` | pixels |
//! | [`BoxFormat::Coco`] | `x_min, y_min, width, height` | pixels |
//! | [`BoxFormat::Yolo`] | `x_center, y_center, width, height` | normalized |
//!
//! Conversions into or out of YOLO need the [`ImageSize`].
//!
//! # Example
//!
//! ```
//! use bboxconv::bbox::{convert, pascal_to_yolo, BoxFormat, ImageSize};
//!
//! let size = ImageSize::new(200.0, 200.0);
//! assert_eq!(
//!     pascal_to_yolo(50.0, 50.0, 150.0, 150.0, size).unwrap(),
//!     [0.5, 0.5, 0.5, 0.5]
//! );
//!
//! let coco = convert(BoxFormat::Yolo, BoxFormat::Coco, &[0.5, 0.5, 0.5, 0.5], Some(size)).unwrap();
//! assert_eq!(coco, [50.0, 50.0, 100.0, 100.0]);
//! ```

mod convert;
mod dispatch;
mod format;
mod model;
pub mod parse;
pub mod validate;

pub use convert::{
    coco_to_pascal, coco_to_yolo, pascal_to_coco, pascal_to_yolo, yolo_to_coco, yolo_to_pascal,
};
pub use dispatch::{convert, convert_bbox, route, Route};
pub use format::{BoxFormat, UnknownFormat};
pub use model::{CocoBox, ImageSize, PascalBox, YoloBox};
pub use parse::ConversionRequest;
