mod engine;

pub use engine::RqrrDetector;
