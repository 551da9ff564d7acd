pub mod errors;
pub mod face;
pub mod pipeline;

pub use errors::{DecodeError, HeadError};
pub use face::extract_face;
pub use pipeline::{HeadImage, HeadPipeline};
