//! Blocking HTTP GET via libcurl (the `curl` crate).
//!
//! Everything the pipeline fetches goes through [`Fetch`], so the album
//! writer can be driven by an in-memory fake in tests.

mod scheme;

pub use scheme::ensure_scheme;

use crate::config::BcdlConfig;
use crate::error::HttpError;
use std::time::Duration;

/// Something that can GET a URL and hand back the full response body.
pub trait Fetch {
    /// Performs a GET and returns the body. Non-2xx final status is an error.
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError>;

    /// Like `get` but decodes the body as UTF-8 (lossy).
    fn get_text(&self, url: &str) -> Result<String, HttpError> {
        self.get(url)
            .map(|body| String::from_utf8_lossy(&body).into_owned())
    }
}

/// libcurl-backed client. A fresh easy handle per request; no retries,
/// no overall timeout.
#[derive(Debug, Clone)]
pub struct CurlClient {
    user_agent: String,
    connect_timeout: Option<Duration>,
    max_redirections: u32,
}

impl CurlClient {
    pub fn from_config(cfg: &BcdlConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            max_redirections: cfg.max_redirections,
        }
    }
}

impl Default for CurlClient {
    fn default() -> Self {
        Self::from_config(&BcdlConfig::default())
    }
}

impl Fetch for CurlClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let transport = |source: curl::Error| HttpError::Transport {
            url: url.to_string(),
            source,
        };

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.max_redirections(self.max_redirections)
            .map_err(transport)?;
        easy.useragent(&self.user_agent).map_err(transport)?;
        if let Some(timeout) = self.connect_timeout {
            easy.connect_timeout(timeout).map_err(transport)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let code = easy.response_code().map_err(transport)?;
        if !(200..300).contains(&code) {
            return Err(HttpError::Status {
                url: url.to_string(),
                code,
            });
        }

        tracing::debug!(url, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
