use common::InvalidIdError;
use fetcher::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("Name lookup request failed")]
    Transport(#[from] FetchError),
    #[error("Name lookup returned an unparsable body")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Name lookup for '{0}' has no id")]
    MissingId(String),
    #[error("Name lookup returned a bad id")]
    InvalidId(#[from] InvalidIdError),
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Profile lookup request failed")]
    Transport(#[from] FetchError),
    #[error("Profile lookup returned an unparsable body")]
    InvalidProfile(#[from] serde_json::Error),
    #[error("Profile has no properties")]
    NoProperties,
    #[error("Profile has no textures property")]
    NoTexturesProperty,
    #[error("Textures property is not valid base64")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Textures property is not a valid texture payload")]
    InvalidPayload(#[source] serde_json::Error),
    #[error("Texture payload has no SKIN url")]
    MissingSkin,
}
