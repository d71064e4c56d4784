use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Startup and serve failures; request-level errors use `AppError`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to prepare storage directory {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
