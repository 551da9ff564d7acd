use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::{errors::FetchError, request::Request};

/// Anything that can turn a [`Request`] into response bytes.
///
/// The pipeline only ever talks to remote services through this trait,
/// which lets tests swap in [`crate::mock::MockFetcher`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn make_web_request(&self, request: Request) -> Result<FetcherResponse, FetchError>;

    async fn get(&self, url: &str) -> Result<FetcherResponse, FetchError> {
        self.make_web_request(Request::builder().set_url(url).build())
            .await
    }
}

#[derive(Debug, Default)]
pub struct FetcherResponse {
    pub raw_bytes: Vec<u8>,
    pub headers: HeaderMap,
}

impl FetcherResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.raw_bytes)
    }
}
