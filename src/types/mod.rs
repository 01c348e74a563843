pub mod query;
pub mod recognition;

pub use query::{ImageData, Query};
pub use recognition::LandmarkRecognition;
