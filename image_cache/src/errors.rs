use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to create cache dir {path}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write cache file {path}")]
    Write { path: PathBuf, source: io::Error },
}
