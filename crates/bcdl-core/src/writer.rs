//! Album writer: creates `<root>/<artist>/<album>/` and fills it track by track.
//!
//! A track whose final file already exists is skipped without touching the
//! network, so re-running over a finished album is a no-op. Payloads are
//! written to `<name>.part` and renamed into place; a crash mid-write never
//! leaves a file that looks complete.

use anyhow::{Context, Result};
use crate::http::Fetch;
use crate::model::Album;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

const SEPARATOR: &str = "=========================================";

/// Progress markers emitted while writing an album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumEvent<'a> {
    /// Before the first track. Carries the album directory relative to the root.
    Started { directory: &'a Path },
    Skipped { filename: &'a str },
    Downloading { filename: &'a str },
    /// After the last track.
    Finished,
}

impl fmt::Display for AlbumEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumEvent::Started { directory } => {
                write!(f, "{}\nStarting download: {}", SEPARATOR, directory.display())
            }
            AlbumEvent::Skipped { filename } => write!(f, "  [skipping {}]", filename),
            AlbumEvent::Downloading { filename } => write!(f, "  [downloading {}]", filename),
            AlbumEvent::Finished => f.write_str(SEPARATOR),
        }
    }
}

/// What a run did, in track order.
#[derive(Debug, Clone, Default)]
pub struct AlbumReport {
    /// Absolute (root-joined) album directory.
    pub directory: PathBuf,
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
}

/// Writes every track of `album` below `root`, skipping files that already exist.
///
/// Stops at the first failure (directory creation, download or write); tracks
/// written before the failure stay on disk.
pub fn write_album(
    album: &mut Album,
    root: &Path,
    client: &dyn Fetch,
    preferred: &[String],
    mut on_event: impl FnMut(&AlbumEvent<'_>),
) -> Result<AlbumReport> {
    let relative = album.directory();
    let directory = root.join(&relative);

    on_event(&AlbumEvent::Started {
        directory: &relative,
    });
    fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create album directory: {}", directory.display()))?;

    let mut report = AlbumReport {
        directory: directory.clone(),
        ..AlbumReport::default()
    };

    for track in album.tracks.iter_mut() {
        let filename = track.filename();
        let path = directory.join(&filename);

        if path.exists() {
            tracing::debug!(file = %path.display(), "already downloaded, skipping");
            on_event(&AlbumEvent::Skipped {
                filename: &filename,
            });
            report.skipped.push(filename);
            continue;
        }

        on_event(&AlbumEvent::Downloading {
            filename: &filename,
        });
        track
            .download(client, preferred)
            .with_context(|| format!("failed to download track {}", filename))?;
        let payload = track.payload().unwrap_or_default();
        write_payload(&path, payload)?;
        tracing::info!(file = %path.display(), bytes = payload.len(), "track written");
        report.downloaded.push(filename);
    }

    on_event(&AlbumEvent::Finished);
    Ok(report)
}

/// Writes `payload` to `<path>.part`, then renames it to `path`.
fn write_payload(path: &Path, payload: &[u8]) -> Result<()> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(TEMP_SUFFIX);
    let temp = PathBuf::from(temp);

    fs::write(&temp, payload)
        .with_context(|| format!("failed to write temp file: {}", temp.display()))?;
    fs::rename(&temp, path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            temp.display(),
            path.display()
        )
    })?;
    Ok(())
}
