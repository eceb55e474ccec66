//! Integration tests for the qrscan-rs library API

#[test]
fn test_prelude_imports() {
    use qrscan_rs::prelude::*;

    let result = ScanResult::from(ScanError::NoQrCode);
    assert_eq!(
        to_wire_json(&result).unwrap(),
        r#"{"success": false, "error": "No QR code detected"}"#
    );

    let scanner = Scanner::with_detector(RqrrDetector::new().with_max_dimension(640));
    assert_eq!(scanner.detector().max_dimension(), 640);

    let bbox = BoundingBox::new(vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
    assert_eq!(bbox.center(), Some([1.0, 1.0]));
}

#[test]
fn test_direct_imports() {
    use qrscan_rs::scan;

    let result = scan("/this/path/does/not/exist.png");
    assert_eq!(result.error(), Some("Could not read image"));
}

#[test]
fn test_detect_crate_is_reexported() {
    use qrscan_rs::{DetectInput, Detection, QrDetector, RqrrDetector};

    let image = image::DynamicImage::new_luma8(16, 16);
    let detection = RqrrDetector::default().detect_and_decode(&image).unwrap();
    assert_eq!(detection, Detection::empty());

    let _input = DetectInput::Bytes(Vec::new());
}

#[test]
fn test_write_wire_json_to_writer() {
    use qrscan_rs::{write_wire_json, ScanResult};

    let mut buf = Vec::new();
    let result = ScanResult::Success {
        data: "x".into(),
        bbox: None,
    };
    write_wire_json(&mut buf, &result).unwrap();
    assert_eq!(buf, br#"{"success": true, "data": "x", "bbox": null}"#);
}
