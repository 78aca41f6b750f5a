//! Lazy per-track payload download.

use crate::error::DownloadError;
use crate::http::{ensure_scheme, Fetch};
use crate::model::Track;

impl Track {
    /// Fetches the track's audio into memory unless it is already cached.
    ///
    /// Picks the best stream per `preferred`, adds a scheme if the page gave
    /// a protocol-relative URL, and issues one GET. HTTP failures propagate
    /// unchanged; nothing is retried.
    pub fn download(
        &mut self,
        client: &dyn Fetch,
        preferred: &[String],
    ) -> Result<(), DownloadError> {
        if self.payload.is_some() {
            return Ok(());
        }

        let remote = self
            .remote_url(preferred)
            .ok_or_else(|| DownloadError::NoStream {
                number: self.number,
                title: self.title.clone(),
            })?;
        let url = ensure_scheme(remote);

        tracing::debug!(track = self.number, url = %url, "fetching track");
        let body = client.get(&url)?;
        tracing::debug!(track = self.number, bytes = body.len(), "track fetched");

        self.payload = Some(body);
        Ok(())
    }
}
