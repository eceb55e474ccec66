//! Failure taxonomy of a scan. The `Display` text of each variant is the message
//! reported in the `error` field of the JSON record.
use qrscan_detect::DetectError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
  #[error("No image path provided")]
  MissingPath,
  #[error("Could not read image")]
  UnreadableImage,
  #[error("No QR code detected")]
  NoQrCode,
  #[error("{0}")]
  Detector(String),
  #[error("{0}")]
  Usage(String),
}

impl From<DetectError> for ScanError {
  fn from(err: DetectError) -> Self {
    match err {
      DetectError::Unreadable(_) => ScanError::UnreadableImage,
      other => ScanError::Detector(other.to_string()),
    }
  }
}
