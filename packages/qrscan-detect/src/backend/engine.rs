use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use rqrr::PreparedImage;

use crate::engine::{DetectError, Detection, QrDetector};
use crate::region::BoundingBox;

/// Detector built on `rqrr`.
///
/// Returns the first grid that decodes. When grids are located but none decode,
/// the geometry of the first one is still reported with empty text.
#[derive(Debug, Clone, Default)]
pub struct RqrrDetector {
    max_dimension: u32,
}

impl RqrrDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Downsample so the longer side is at most `max_dimension` before detection.
    /// Zero disables downsampling.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Size the image is resized to before detection.
    fn working_size(&self, width: u32, height: u32) -> (u32, u32) {
        let longest = width.max(height);
        if self.max_dimension == 0 || longest <= self.max_dimension {
            return (width, height);
        }
        let factor = longest as f32 / self.max_dimension as f32;
        (
            ((width as f32 / factor) as u32).max(1),
            ((height as f32 / factor) as u32).max(1),
        )
    }
}

impl QrDetector for RqrrDetector {
    fn detect_and_decode(&self, image: &DynamicImage) -> Result<Detection, DetectError> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Ok(Detection::empty());
        }

        let (w, h) = self.working_size(width, height);
        let working = if (w, h) != (width, height) {
            log::debug!("downsampling {width}x{height} to {w}x{h}");
            imageops::resize(&gray, w, h, FilterType::Nearest)
        } else {
            gray.clone()
        };
        // Per-axis, since truncating the resized sides skews the aspect ratio.
        let (scale_x, scale_y) = (width as f32 / w as f32, height as f32 / h as f32);

        let mut prepared = PreparedImage::prepare(working);
        let grids = prepared.detect_grids();
        log::debug!("located {} candidate grid(s)", grids.len());

        let mut first_located = None;
        for grid in &grids {
            let bbox = BoundingBox::new(
                grid.bounds
                    .iter()
                    .map(|p| [p.x as f32 * scale_x, p.y as f32 * scale_y])
                    .collect(),
            );
            match grid.decode() {
                Ok((meta, text)) if !text.is_empty() => {
                    log::debug!(
                        "decoded {} byte(s), ecc level {}, mask {}",
                        text.len(),
                        meta.ecc_level,
                        meta.mask
                    );
                    let rectified = crop_to(&gray, &bbox);
                    return Ok(Detection {
                        text,
                        bbox: Some(bbox),
                        rectified,
                    });
                }
                Ok(_) => log::debug!("grid decoded to an empty payload"),
                Err(e) => log::debug!("grid failed to decode: {e}"),
            }
            if first_located.is_none() {
                first_located = Some(bbox);
            }
        }

        Ok(match first_located {
            Some(bbox) => Detection {
                text: String::new(),
                rectified: crop_to(&gray, &bbox),
                bbox: Some(bbox),
            },
            None => Detection::empty(),
        })
    }
}

/// Axis-aligned crop of `gray` covering `bbox`, clipped to the image.
fn crop_to(gray: &GrayImage, bbox: &BoundingBox) -> Option<GrayImage> {
    let (x, y, w, h) = bbox.extent()?;
    let x = (x.floor() as u32).min(gray.width());
    let y = (y.floor() as u32).min(gray.height());
    let w = (w.ceil() as u32).min(gray.width() - x);
    let h = (h.ceil() as u32).min(gray.height() - y);
    if w == 0 || h == 0 {
        return None;
    }
    Some(imageops::crop_imm(gray, x, y, w, h).to_image())
}
