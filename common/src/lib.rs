pub mod canonical_id;
pub mod config;

pub use canonical_id::{CanonicalId, InvalidIdError};
pub use config::Config;
