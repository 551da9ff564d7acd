use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP client general error")]
    ClientGeneralError(#[from] reqwest::Error),
    #[error("{url} responded with unexpected status {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("HTTP client failed to create header")]
    InvalidHeader,
}

impl From<InvalidHeaderName> for FetchError {
    fn from(_err: InvalidHeaderName) -> Self {
        Self::InvalidHeader
    }
}

impl From<InvalidHeaderValue> for FetchError {
    fn from(_err: InvalidHeaderValue) -> Self {
        Self::InvalidHeader
    }
}
