use common::InvalidIdError;
use fetcher::FetchError;
use image_cache::CacheError;
use mojang::{AssetError, ResolutionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Skin is not a valid PNG")]
    InvalidImage(#[source] image::ImageError),
    #[error("Skin is {width}x{height}, too small to hold a face")]
    TooSmall { width: u32, height: u32 },
    #[error("Failed to encode face")]
    Encode(#[source] image::ImageError),
    #[error("Face extraction task did not finish")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Every way producing a head can fail. The HTTP layer collapses all of
/// these into the fallback image; the variant only ends up in the logs.
#[derive(Error, Debug)]
pub enum HeadError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Skin download failed")]
    Transport(#[from] FetchError),
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}
