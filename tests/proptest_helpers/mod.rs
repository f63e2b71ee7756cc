#![allow(dead_code)]

use bboxconv::bbox::{CocoBox, ImageSize, PascalBox, YoloBox};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Tolerance for a YOLO round-trip on an image of the given size.
pub fn eps_yolo(size: ImageSize) -> f64 {
    size.width.max(size.height) * 1e-9
}

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_image_size() -> impl Strategy<Value = ImageSize> {
    (1u32..=4096, 1u32..=4096).prop_map(ImageSize::from)
}

/// A valid Pascal box (positive extent) with no size constraint.
pub fn arb_pascal_box() -> impl Strategy<Value = PascalBox> {
    (0.0f64..10_000.0, 0.0f64..10_000.0, 0.01f64..5_000.0, 0.01f64..5_000.0)
        .prop_map(|(x, y, w, h)| PascalBox::new(x, y, x + w, y + h))
        .prop_filter("extent must survive rounding", |b| {
            b.x_max > b.x_min && b.y_max > b.y_min
        })
}

/// An image size and a Pascal box lying inside it.
pub fn arb_pascal_in_image() -> impl Strategy<Value = (ImageSize, PascalBox)> {
    arb_image_size().prop_flat_map(|size| {
        (
            Just(size),
            0.0f64..1.0,
            0.0f64..1.0,
            0.0f64..1.0,
            0.0f64..1.0,
        )
            .prop_map(|(size, a, b, c, d)| {
                let (x0, x1) = ordered(a * size.width, b * size.width);
                let (y0, y1) = ordered(c * size.height, d * size.height);
                (size, PascalBox::new(x0, y0, x1, y1))
            })
            .prop_filter("box must not be degenerate", |(_, b)| {
                b.x_max > b.x_min && b.y_max > b.y_min
            })
    })
}

/// An image size and a COCO box lying inside it.
pub fn arb_coco_in_image() -> impl Strategy<Value = (ImageSize, CocoBox)> {
    arb_pascal_in_image().prop_map(|(size, b)| {
        (
            size,
            CocoBox::new(b.x_min, b.y_min, b.x_max - b.x_min, b.y_max - b.y_min),
        )
    })
    .prop_filter("box must fit after rounding", |(size, b)| {
        b.width > 0.0 && b.height > 0.0 && b.is_within(*size)
    })
}

/// Any in-range YOLO box: centers in `[0, 1]`, extents in `(0, 1]`.
pub fn arb_yolo_box() -> impl Strategy<Value = YoloBox> {
    (0.0f64..=1.0, 0.0f64..=1.0, 1e-6f64..=1.0, 1e-6f64..=1.0)
        .prop_map(|(xc, yc, w, h)| YoloBox::new(xc, yc, w, h))
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn assert_close(actual: [f64; 4], expected: [f64; 4], eps: f64) -> Result<(), String> {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if (a - e).abs() > eps {
            return Err(format!(
                "coordinate {i} differs: actual={a} expected={e} (eps={eps}); actual={actual:?} expected={expected:?}"
            ));
        }
    }
    Ok(())
}
