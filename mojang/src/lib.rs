mod api_response_objects;
pub mod errors;
pub mod locator;
pub mod resolver;
mod utils;

pub use errors::{AssetError, ResolutionError};
pub use locator::AssetLocator;
pub use resolver::IdentityResolver;
