//! # qrscan-rs
//!
//! Scan an image for a QR code and report the outcome as a single JSON record.
//!
//! Detection and decoding are delegated to [`qrscan_detect`]; this crate adapts its
//! output into a [`ScanResult`] and writes it in the same line format the original
//! scanner tool printed.
//!
//! ## Quick Start
//!
//! ```ignore
//! use qrscan_rs::prelude::*;
//!
//! let result = scan("ticket.png");
//! println!("{}", to_wire_json(&result)?);
//!
//! // Or with a tuned detector
//! let scanner = Scanner::with_detector(RqrrDetector::new().with_max_dimension(1024));
//! if let Some(text) = scanner.scan("photo.jpg").data() {
//!     println!("decoded: {text}");
//! }
//! ```

pub mod error;
pub mod scan_result;
pub mod scanner;
pub mod wire_json;

pub use error::ScanError;
pub use qrscan_detect::{BoundingBox, DetectError, DetectInput, Detection, QrDetector, RqrrDetector};
pub use scan_result::ScanResult;
pub use scanner::{scan, Scanner};
pub use wire_json::{to_wire_json, write_wire_json, PythonFormatter};

/// Prelude module for convenient imports
///
/// ```ignore
/// use qrscan_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        scan, to_wire_json, write_wire_json, BoundingBox, DetectInput, QrDetector, RqrrDetector, ScanError,
        ScanResult, Scanner,
    };
}
