use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use image::{DynamicImage, GrayImage, ImageReader};
use thiserror::Error;

use crate::region::BoundingBox;

#[derive(Debug, Clone)]
pub enum DetectInput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
}

/// Result of one detect-and-decode pass.
///
/// `text` is empty when no symbol decoded. `bbox` may still be present in that case
/// if the detector located a symbol it could not read.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub text: String,
    pub bbox: Option<BoundingBox>,
    pub rectified: Option<GrayImage>,
}

impl Detection {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            bbox: None,
            rectified: None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        !self.text.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("unreadable image: {0}")]
    Unreadable(String),
    #[error("{0}")]
    Backend(String),
    #[error("panicked: {0}")]
    Panicked(String),
}

pub trait QrDetector: Send + Sync {
    fn detect_and_decode(&self, image: &DynamicImage) -> Result<Detection, DetectError>;
}

impl<D: QrDetector + ?Sized> QrDetector for Box<D> {
    fn detect_and_decode(&self, image: &DynamicImage) -> Result<Detection, DetectError> {
        (**self).detect_and_decode(image)
    }
}

/// Loads an image, sniffing the format from its contents rather than the file extension.
pub fn load_image(input: &DetectInput) -> Result<DynamicImage, DetectError> {
    let unreadable = |e: &dyn std::fmt::Display| DetectError::Unreadable(e.to_string());
    match input {
        DetectInput::FilePath(path) => {
            log::debug!("loading image from {}", path.display());
            ImageReader::open(path)
                .map_err(|e| unreadable(&e))?
                .with_guessed_format()
                .map_err(|e| unreadable(&e))?
                .decode()
                .map_err(|e| unreadable(&e))
        }
        DetectInput::Bytes(data) => {
            log::debug!("loading image from {} bytes", data.len());
            image::load_from_memory(data).map_err(|e| unreadable(&e))
        }
    }
}

/// Runs `f`, turning a panic inside it into `DetectError::Panicked`.
pub fn guard<T, F>(f: F) -> Result<T, DetectError>
where
    F: FnOnce() -> Result<T, DetectError>,
{
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(DetectError::Panicked(panic_message(payload.as_ref()))))
}

/// [`load_image`] with decoder panics reported as `DetectError::Panicked`.
pub fn load_image_guarded(input: &DetectInput) -> Result<DynamicImage, DetectError> {
    guard(|| load_image(input))
}

/// Runs the detector, turning a panic inside the backend into `DetectError::Panicked`.
pub fn detect_guarded<D>(detector: &D, image: &DynamicImage) -> Result<Detection, DetectError>
where
    D: QrDetector + ?Sized,
{
    guard(|| detector.detect_and_decode(image))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".into()
    }
}
