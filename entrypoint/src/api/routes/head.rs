use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::WithRejection;

use crate::{
    ServerState,
    routes::error_boundary::{ApiError, png_response},
};

fn strip_png_suffix(segment: &str) -> &str {
    segment.strip_suffix(".png").unwrap_or(segment)
}

pub(crate) async fn head_by_uuid_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Result<Response, ApiError> {
    let head = state
        .pipeline
        .get_head_by_id(strip_png_suffix(&id))
        .await?;

    Ok(png_response(head.id.as_str(), head.image))
}

pub(crate) async fn head_by_name_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Path(name), _): WithRejection<Path<String>, ApiError>,
) -> Result<Response, ApiError> {
    let head = state
        .pipeline
        .get_head_by_name(strip_png_suffix(&name))
        .await?;

    // named after the resolved id, not the requested name
    Ok(png_response(head.id.as_str(), head.image))
}
