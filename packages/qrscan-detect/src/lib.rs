pub mod backend;
pub mod engine;
pub mod region;

pub use backend::RqrrDetector;
pub use engine::{detect_guarded, guard, load_image, load_image_guarded, DetectError, DetectInput, Detection, QrDetector};
pub use region::BoundingBox;
