//! Turns every failed head into the fallback image.
//!
//! Handlers return [`ApiError`], which only marks the response. The
//! [`serve_fallback`] middleware owns the fallback bytes and swaps marked
//! responses, as well as wrong-method rejections, for a `200 image/png`.
//! Unknown routes are the one case that gets a real 404.

use std::{any::Any, error::Error as StdError, sync::Arc};

use axum::{
    body::Body,
    extract::{Request, State, rejection::PathRejection},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use heads::HeadError;
use thiserror::Error;
use tracing::{debug, error};

use crate::ServerState;

const FALLBACK_FILE_STEM: &str = "fallback";

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Head(#[from] HeadError),
    #[error("Failed to parse path")]
    PathExtractorRejection(#[from] PathRejection),
}

#[derive(Clone, Debug)]
pub(crate) struct ServeFallback(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response
            .extensions_mut()
            .insert(ServeFallback(error_chain(&self)));

        response
    }
}

/// Renders an error followed by every `source()` below it.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }

    chain
}

pub(crate) fn png_response(file_stem: &str, image: impl Into<Body>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{file_stem}.png\""),
        ),
    ];

    (headers, image.into()).into_response()
}

pub(crate) async fn serve_fallback(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Response {
    let uri = request.uri().clone();
    let method = request.method().clone();
    let response = next.run(request).await;

    let reason = if let Some(marker) = response.extensions().get::<ServeFallback>() {
        marker.0.clone()
    } else if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        format!("method {method} not allowed")
    } else {
        return response;
    };

    error!("Serving fallback head for {}: {}", uri, reason);

    png_response(FALLBACK_FILE_STEM, state.fallback.clone())
}

pub(crate) fn panic_into_fallback(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    };

    let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
    response
        .extensions_mut()
        .insert(ServeFallback(format!("handler panicked: {message}")));

    response
}

pub(crate) async fn not_found_handler(request: Request) -> Response {
    debug!("No route for {}", request.uri());

    (StatusCode::NOT_FOUND, "not found").into_response()
}
