use axum::body::Bytes;
use heads::HeadPipeline;

/// Read-only state shared by every request.
pub struct ServerState {
    pub(crate) pipeline: HeadPipeline,
    /// Served whenever a head cannot be produced. Loaded once at startup.
    pub(crate) fallback: Bytes,
}

impl ServerState {
    pub fn new(pipeline: HeadPipeline, fallback: impl Into<Bytes>) -> Self {
        Self {
            pipeline,
            fallback: fallback.into(),
        }
    }
}
