use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("bboxconv 0.1.0\n");
}

// Convert subcommand tests

#[test]
fn convert_pascal_to_coco() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "pascal", "coco", "50", "50", "150", "150"]);
    cmd.assert().success().stdout("[50, 50, 100, 100]\n");
}

#[test]
fn convert_pascal_to_yolo_with_size() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args([
        "convert", "pascal", "yolo", "0", "0", "200", "100", "--size", "200x200",
    ]);
    cmd.assert().success().stdout("[0.5, 0.25, 1, 0.5]\n");
}

#[test]
fn convert_yolo_to_coco_json_output() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args([
        "convert", "yolo", "coco", "0.5", "0.5", "0.5", "0.5", "--size", "200x200", "--output",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"from\": \"yolo\""))
        .stdout(predicates::str::contains("\"output\": ["))
        .stdout(predicates::str::contains("\"width\": 200.0"));
}

#[test]
fn convert_output_format_from_env() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.env("BBOXCONV_OUTPUT", "json");
    cmd.args(["convert", "coco", "pascal", "50", "50", "100", "100"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"to\": \"pascal\""))
        .stdout(predicates::str::contains("\"size\"").not());
}

#[test]
fn convert_negative_coordinate_is_value_error() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "pascal", "coco", "-10", "-10", "50", "50"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("value error"))
        .stderr(predicates::str::contains("non-negative"));
}

#[test]
fn convert_out_of_bounds_fails() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args([
        "convert", "pascal", "yolo", "0", "0", "250", "100", "--size", "200x200",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("beyond image dimensions"));
}

#[test]
fn convert_non_numeric_coordinate_is_type_error() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "coco", "pascal", "50", "fifty", "100", "100"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("type error"))
        .stderr(predicates::str::contains("y_min"));
}

#[test]
fn convert_missing_size_is_type_error() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "yolo", "pascal", "0.5", "0.5", "0.5", "0.5"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("requires an image size"));
}

#[test]
fn convert_wrong_coordinate_count_fails() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "pascal", "coco", "1", "2", "3"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("expected 4 coordinates, found 3"));
}

#[test]
fn convert_same_format_is_unsupported() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "pascal", "pascal", "0", "0", "10", "10"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Unsupported conversion: pascal to pascal"));
}

#[test]
fn convert_unknown_format_is_unsupported() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["convert", "voc", "coco", "0", "0", "10", "10"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Unsupported conversion: voc to coco"));
}

#[test]
fn convert_debug_log_names_resolved_route() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd.args(["convert", "pascal", "coco", "50", "50", "150", "150"]);
    cmd.assert()
        .success()
        .stdout("[50, 50, 100, 100]\n")
        .stderr(predicates::str::contains("resolved route: Some(PascalToCoco)"));
}

// Routes subcommand tests

#[test]
fn routes_lists_all_conversions() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.arg("routes");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("pascal -> coco"))
        .stdout(predicates::str::contains("coco   -> yolo    (requires --size)"));
}

#[test]
fn routes_json_output() {
    let mut cmd = Command::cargo_bin("bboxconv").unwrap();
    cmd.args(["routes", "--output", "json"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"requires_size\": true"))
        .stdout(predicates::str::contains("\"requires_size\": false"));
}
