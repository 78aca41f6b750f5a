//! Page URL in, album directory out.

use anyhow::{Context, Result};
use crate::config::BcdlConfig;
use crate::extract;
use crate::http::Fetch;
use crate::model::Album;
use crate::writer::{self, AlbumEvent, AlbumReport};

/// Fetches the album page at `url`, extracts its metadata and writes every
/// track below `config.download_root`.
pub fn download_album_page(
    url: &str,
    config: &BcdlConfig,
    client: &dyn Fetch,
    on_event: impl FnMut(&AlbumEvent<'_>),
) -> Result<AlbumReport> {
    let url = url.trim();

    let page = client
        .get_text(url)
        .with_context(|| format!("failed to fetch album page {}", url))?;
    tracing::info!(url, bytes = page.len(), "fetched album page");

    let metadata = extract::extract_album(&page)
        .with_context(|| format!("failed to extract album metadata from {}", url))?;
    let mut album = Album::from_metadata(metadata);
    tracing::info!(
        artist = %album.artist,
        album = %album.title,
        tracks = album.tracks.len(),
        "album found"
    );

    writer::write_album(
        &mut album,
        &config.download_root,
        client,
        &config.preferred_encodings,
        on_event,
    )
}
