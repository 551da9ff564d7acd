pub mod client;
pub mod errors;
pub mod request;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::HttpFetcher;
pub use errors::FetchError;
pub use request::{Request, RequestBuilder};
pub use traits::{Fetcher, FetcherResponse};
