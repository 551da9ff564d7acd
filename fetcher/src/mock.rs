//! Canned-response fetcher for tests.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::{
    errors::FetchError,
    request::Request,
    traits::{Fetcher, FetcherResponse},
};

enum MockReply {
    Body(Vec<u8>),
    Status(u16),
}

/// Replies from a fixed url -> response map and records every request made.
///
/// Unknown urls answer with a 404 status error.
#[derive(Default)]
pub struct MockFetcher {
    replies: HashMap<String, MockReply>,
    requested: Mutex<Vec<Request>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.replies
            .insert(url.into(), MockReply::Body(body.into()));

        self
    }

    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.replies.insert(url.into(), MockReply::Status(status));

        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requested
            .lock()
            .expect("mock fetcher lock poisoned")
            .clone()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.url)
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requested_urls().len()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn make_web_request(&self, request: Request) -> Result<FetcherResponse, FetchError> {
        self.requested
            .lock()
            .expect("mock fetcher lock poisoned")
            .push(request.clone());

        match self.replies.get(&request.url) {
            Some(MockReply::Body(body)) => Ok(FetcherResponse {
                raw_bytes: body.clone(),
                headers: HeaderMap::new(),
            }),
            Some(MockReply::Status(status)) => Err(FetchError::UnexpectedStatus {
                url: request.url,
                status: *status,
            }),
            None => Err(FetchError::UnexpectedStatus {
                url: request.url,
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_and_defaults_to_not_found() {
        let fetcher = MockFetcher::new().with_body("https://a.test/x", b"hello".to_vec());

        let hit = fetcher.get("https://a.test/x").await.unwrap();
        assert_eq!(hit.raw_bytes, b"hello");

        let miss = fetcher.get("https://a.test/y").await;
        assert!(matches!(
            miss,
            Err(FetchError::UnexpectedStatus { status: 404, .. })
        ));

        assert_eq!(
            fetcher.requested_urls(),
            vec!["https://a.test/x".to_string(), "https://a.test/y".to_string()]
        );
    }
}
