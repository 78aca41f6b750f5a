//! Typed errors for the fetch, extract and download stages.
//!
//! Orchestration code wraps these in `anyhow` with context naming the URL or
//! path involved; nothing here is retried.

use thiserror::Error;

/// Failure of a single blocking GET.
#[derive(Debug, Error)]
pub enum HttpError {
    /// libcurl could not complete the transfer (DNS, connect, read, bad URL).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The final response (after redirects) was not 2xx.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}

/// The album page did not carry the inline metadata we need.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no `{0}` field found in page")]
    MissingField(&'static str),
    #[error("malformed track list: {0}")]
    MalformedTracks(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    /// Track record had no file map (or an empty one); nothing to fetch.
    #[error("track {number} ({title}) has no downloadable stream")]
    NoStream { number: u32, title: String },
    #[error(transparent)]
    Http(#[from] HttpError),
}
