//! Integration tests for the `extract` subcommand.

mod common;

use common::{TOP_LINE_RECT, build_pdf, cmd, two_page_pdf, write_temp_pdf};
use predicates::prelude::*;

#[test]
fn rectangle_drawn_on_page_one_reads_every_page() {
    let f = write_temp_pdf(&two_page_pdf());
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--rect", TOP_LINE_RECT])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Page 2 ---\nHello World"))
        .stdout(predicate::str::contains("Page 1").not())
        .stderr(predicate::str::contains("Bounding Box Coordinates"))
        .stderr(predicate::str::contains(
            "Top-left: (70.0, 95.0) | Bottom-right: (470.0, 135.0)",
        ));
}

#[test]
fn last_rect_wins() {
    let f = write_temp_pdf(&two_page_pdf());
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--rect", TOP_LINE_RECT, "--rect", "700,10,20,20"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No text found in the selected area across all pages.",
        ));
}

#[test]
fn no_rectangle_asks_for_one() {
    let f = write_temp_pdf(&two_page_pdf());
    cmd()
        .arg("extract")
        .arg(f.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Draw a bounding box to select text."));
}

#[test]
fn canvas_document_uses_its_last_object() {
    let f = write_temp_pdf(&two_page_pdf());
    let dir = tempfile::tempdir().unwrap();
    let canvas = dir.path().join("canvas.json");
    std::fs::write(
        &canvas,
        r#"{"objects": [
            {"left": 700, "top": 10, "width": 20, "height": 20},
            {"left": 70, "top": 95, "width": 400, "height": 40}
        ]}"#,
    )
    .unwrap();
    cmd()
        .arg("extract")
        .arg(f.path())
        .arg("--canvas")
        .arg(&canvas)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"));
}

#[test]
fn canvas_from_stdin() {
    let f = write_temp_pdf(&two_page_pdf());
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--canvas", "-"])
        .write_stdin(r#"{"objects": []}"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("Draw a bounding box to select text."));
}

#[test]
fn json_output_lists_pages() {
    let f = write_temp_pdf(&two_page_pdf());
    let output = cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--rect", TOP_LINE_RECT, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pages"][0]["page_number"], 2);
    assert_eq!(value["pages"][0]["text"], "Hello World");
    assert_eq!(value["text"], "\n\n--- Page 2 ---\nHello World");
}

#[test]
fn output_without_a_path_uses_the_download_name() {
    let f = write_temp_pdf(&two_page_pdf());
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg("extract")
        .arg(f.path())
        .args(["--rect", TOP_LINE_RECT, "--output"])
        .assert()
        .success();
    let saved = std::fs::read_to_string(dir.path().join("extracted_text.txt")).unwrap();
    assert_eq!(saved, "\n\n--- Page 2 ---\nHello World");
}

#[test]
fn output_to_a_named_file() {
    let f = write_temp_pdf(&two_page_pdf());
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("region.txt");
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--rect", TOP_LINE_RECT])
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    assert!(std::fs::read_to_string(&out).unwrap().ends_with("Hello World"));
}

#[test]
fn backwards_rect_is_an_extraction_error() {
    let f = write_temp_pdf(&two_page_pdf());
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--rect", "100,100,-20,10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to extract text"));
}

#[test]
fn page_out_of_range_fails() {
    let f = write_temp_pdf(&two_page_pdf());
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--page", "5", "--rect", TOP_LINE_RECT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process the selected page."));
}

#[test]
fn drawing_on_page_two_maps_through_its_image() {
    let pdf = build_pdf(&[
        b"BT /F1 10 Tf 1 0 0 1 72 700 Tm (First page) Tj ET",
        b"BT /F1 10 Tf 1 0 0 1 72 700 Tm (Second page) Tj ET",
    ]);
    let f = write_temp_pdf(&pdf);
    cmd()
        .arg("extract")
        .arg(f.path())
        .args(["--page", "2", "--rect", TOP_LINE_RECT])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--- Page 1 ---\nFirst page\n\n--- Page 2 ---\nSecond page",
        ));
}
