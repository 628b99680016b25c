// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Anything that stops a catalog from loading. Fatal for the current render pass.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to sheet failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sheet data: {0}")]
    Csv(#[from] csv::Error),

    #[error("sheet has no {0:?} column")]
    MissingColumn(String),
}
