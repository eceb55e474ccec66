//! The record printed for every scan.
//!
//! A result is either a decoded payload or an error message, never both. The JSON
//! form always leads with `success`; a successful record always carries `bbox`, which
//! is `null` when the detector reported no geometry.
use qrscan_detect::BoundingBox;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ScanError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "WireRecord")]
pub enum ScanResult {
  Success { data: String, bbox: Option<BoundingBox> },
  Failure { error: String },
}

impl ScanResult {
  pub fn is_success(&self) -> bool {
    matches!(self, ScanResult::Success { .. })
  }

  pub fn data(&self) -> Option<&str> {
    match self {
      ScanResult::Success { data, .. } => Some(data),
      ScanResult::Failure { .. } => None,
    }
  }

  pub fn bbox(&self) -> Option<&BoundingBox> {
    match self {
      ScanResult::Success { bbox, .. } => bbox.as_ref(),
      ScanResult::Failure { .. } => None,
    }
  }

  pub fn error(&self) -> Option<&str> {
    match self {
      ScanResult::Success { .. } => None,
      ScanResult::Failure { error } => Some(error),
    }
  }
}

impl From<ScanError> for ScanResult {
  fn from(err: ScanError) -> Self {
    ScanResult::Failure {
      error: err.to_string(),
    }
  }
}

impl From<Result<(String, Option<BoundingBox>), ScanError>> for ScanResult {
  fn from(outcome: Result<(String, Option<BoundingBox>), ScanError>) -> Self {
    match outcome {
      Ok((data, bbox)) => ScanResult::Success { data, bbox },
      Err(err) => err.into(),
    }
  }
}

impl Serialize for ScanResult {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      ScanResult::Success { data, bbox } => {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry("data", data)?;
        map.serialize_entry("bbox", bbox)?;
        map.end()
      }
      ScanResult::Failure { error } => {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("success", &false)?;
        map.serialize_entry("error", error)?;
        map.end()
      }
    }
  }
}

/// Loose shape accepted on input; validated into a `ScanResult`.
#[derive(Deserialize)]
struct WireRecord {
  success: bool,
  #[serde(default)]
  data: Option<String>,
  #[serde(default)]
  bbox: Option<BoundingBox>,
  #[serde(default)]
  error: Option<String>,
}

impl TryFrom<WireRecord> for ScanResult {
  type Error = String;

  fn try_from(record: WireRecord) -> Result<Self, Self::Error> {
    match (record.success, record.data, record.error) {
      (true, Some(data), None) => Ok(ScanResult::Success {
        data,
        bbox: record.bbox,
      }),
      (false, None, Some(error)) if record.bbox.is_none() => Ok(ScanResult::Failure { error }),
      (true, _, _) => Err("successful scan result must carry `data` and no `error`".into()),
      (false, _, _) => Err("failed scan result must carry `error` and no `data` or `bbox`".into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn corners() -> BoundingBox {
    BoundingBox::new(vec![[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0]])
  }

  #[test]
  fn test_success_accessors() {
    let result = ScanResult::Success {
      data: "HELLO".into(),
      bbox: Some(corners()),
    };
    assert!(result.is_success());
    assert_eq!(result.data(), Some("HELLO"));
    assert_eq!(result.bbox(), Some(&corners()));
    assert_eq!(result.error(), None);
  }

  #[test]
  fn test_failure_accessors() {
    let result = ScanResult::from(ScanError::NoQrCode);
    assert!(!result.is_success());
    assert_eq!(result.data(), None);
    assert_eq!(result.bbox(), None);
    assert_eq!(result.error(), Some("No QR code detected"));
  }

  #[test]
  fn test_success_keeps_null_bbox_key() {
    let result = ScanResult::Success {
      data: "x".into(),
      bbox: None,
    };
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"success":true,"data":"x","bbox":null}"#);
  }

  #[test]
  fn test_failure_has_only_error() {
    let json = serde_json::to_string(&ScanResult::from(ScanError::UnreadableImage)).unwrap();
    assert_eq!(json, r#"{"success":false,"error":"Could not read image"}"#);
  }

  #[test]
  fn test_from_outcome() {
    let ok: Result<(String, Option<BoundingBox>), ScanError> = Ok(("payload".into(), None));
    assert_eq!(ScanResult::from(ok).data(), Some("payload"));

    let err: Result<(String, Option<BoundingBox>), ScanError> = Err(ScanError::Detector("nope".into()));
    assert_eq!(ScanResult::from(err).error(), Some("nope"));
  }

  #[test]
  fn test_reads_back_wire_records() {
    let success: ScanResult =
      serde_json::from_str(r#"{"success": true, "data": "HELLO", "bbox": [[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0]]}"#)
        .unwrap();
    assert_eq!(
      success,
      ScanResult::Success {
        data: "HELLO".into(),
        bbox: Some(corners()),
      }
    );

    let failure: ScanResult = serde_json::from_str(r#"{"success": false, "error": "No QR code detected"}"#).unwrap();
    assert_eq!(failure.error(), Some("No QR code detected"));
  }

  #[test]
  fn test_rejects_records_with_both_or_neither() {
    assert!(serde_json::from_str::<ScanResult>(r#"{"success": true, "data": "a", "error": "b"}"#).is_err());
    assert!(serde_json::from_str::<ScanResult>(r#"{"success": false}"#).is_err());
    assert!(serde_json::from_str::<ScanResult>(r#"{"success": true}"#).is_err());
    assert!(serde_json::from_str::<ScanResult>(r#"{"success": false, "data": "a", "error": "b"}"#).is_err());
  }

  #[test]
  fn test_rejects_geometry_on_failure() {
    let with_bbox = r#"{"success": false, "error": "x", "bbox": [[1.0, 2.0], [3.0, 2.0]]}"#;
    assert!(serde_json::from_str::<ScanResult>(with_bbox).is_err());
  }
}
