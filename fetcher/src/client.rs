use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::{debug, info};

use crate::{
    errors::FetchError,
    request::Request,
    traits::{Fetcher, FetcherResponse},
};

const USER_AGENT: &str = concat!("heads/", env!("CARGO_PKG_VERSION"));

/// Connection-pooling HTTP client shared by every request task.
///
/// Created once at startup; dropping it closes the pool.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .gzip(true)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn make_web_request(&self, request: Request) -> Result<FetcherResponse, FetchError> {
        let mut request_builder = self.client.get(request.url.clone());

        if let Some(headers) = request.headers {
            let mut header_map = HeaderMap::new();

            for (key, value) in headers.iter() {
                header_map.append(HeaderName::from_str(key)?, HeaderValue::from_str(value)?);
            }

            request_builder = request_builder.headers(header_map);
        }

        info!("Sending request to {}", request.url);

        let response = request_builder.send().await?;

        debug!("{response:?}");

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                url: request.url,
                status: status.as_u16(),
            });
        }

        let headers = response.headers().clone();
        let raw_bytes = response.bytes().await?.to_vec();

        Ok(FetcherResponse { raw_bytes, headers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_invalid_header_before_sending() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let request = Request::builder()
            .set_url("http://127.0.0.1:9/")
            .set_headers(&[("bad header".into(), "value".into())])
            .build();

        let result = fetcher.make_web_request(request).await;

        assert!(matches!(result, Err(FetchError::InvalidHeader)));
    }
}
