//! The scanner adapter: load an image, hand it to a detector, and fold every outcome
//! into a [`ScanResult`].
use std::path::Path;

use image::DynamicImage;
use qrscan_detect::{
    detect_guarded, guard, load_image, BoundingBox, DetectError, DetectInput, Detection, QrDetector, RqrrDetector,
};

use crate::error::ScanError;
use crate::scan_result::ScanResult;

/// Scans images with a pluggable detector. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Scanner<D = RqrrDetector> {
    detector: D,
}

impl Scanner<RqrrDetector> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: QrDetector> Scanner<D> {
    pub fn with_detector(detector: D) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Scan the image at `image_path`.
    pub fn scan<P: AsRef<Path>>(&self, image_path: P) -> ScanResult {
        self.scan_input(&DetectInput::FilePath(image_path.as_ref().to_path_buf()))
    }

    /// Scan an encoded image held in memory.
    pub fn scan_bytes(&self, bytes: &[u8]) -> ScanResult {
        self.scan_input(&DetectInput::Bytes(bytes.to_vec()))
    }

    pub fn scan_input(&self, input: &DetectInput) -> ScanResult {
        self.try_scan_input(input).into()
    }

    /// Like [`Scanner::scan_input`] but keeps the failure as a typed [`ScanError`].
    ///
    /// The rectified symbol image produced by the detector is dropped here.
    pub fn try_scan_input(&self, input: &DetectInput) -> Result<(String, Option<BoundingBox>), ScanError> {
        self.scan_loaded(|| load_image(input))
    }

    /// Loading and detection both run under [`guard`], so a panic in an image decoder or
    /// in the backend comes back as an error.
    fn scan_loaded<L>(&self, load: L) -> Result<(String, Option<BoundingBox>), ScanError>
    where
        L: FnOnce() -> Result<DynamicImage, DetectError>,
    {
        let image = guard(load).map_err(|e| {
            match &e {
                DetectError::Unreadable(_) => log::debug!("{e}"),
                _ => log::warn!("image loading failed: {e}"),
            }
            ScanError::from(e)
        })?;
        log::debug!("loaded {}x{} image", image.width(), image.height());

        let detection = detect_guarded(&self.detector, &image).map_err(|e| {
            log::warn!("detector failed: {e}");
            ScanError::from(e)
        })?;

        if !detection.is_decoded() {
            log::debug!("no payload decoded (geometry located: {})", detection.bbox.is_some());
            return Err(ScanError::NoQrCode);
        }

        let Detection { text, bbox, .. } = detection;
        Ok((text, bbox))
    }
}

/// Scan the image at `image_path` with the default detector.
pub fn scan<P: AsRef<Path>>(image_path: P) -> ScanResult {
    Scanner::new().scan(image_path)
}
