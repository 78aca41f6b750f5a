//! Album and track as held in memory for one run.

use crate::extract::{AlbumMetadata, TrackRecord};
use crate::naming;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One playable track. The payload is fetched at most once and kept in memory
/// until the track is dropped.
#[derive(Debug, Clone)]
pub struct Track {
    pub number: u32,
    pub title: String,
    files: BTreeMap<String, String>,
    pub(crate) payload: Option<Vec<u8>>,
}

impl Track {
    pub fn new(number: u32, title: impl Into<String>, files: BTreeMap<String, String>) -> Self {
        Self {
            number,
            title: title.into(),
            files,
            payload: None,
        }
    }

    pub fn from_record(record: TrackRecord) -> Self {
        Self::new(
            record.track_num,
            record.title,
            record.file.unwrap_or_default(),
        )
    }

    /// `<NN> - <title>.mp3`, sanitized.
    pub fn filename(&self) -> String {
        naming::track_filename(self.number, &self.title)
    }

    /// Stream URL of the best available encoding, as found in the page
    /// (possibly scheme-less).
    ///
    /// Walks `preferred` in order; if none is present, takes the
    /// alphabetically first key. `None` when the track has no streams.
    pub fn remote_url(&self, preferred: &[String]) -> Option<&str> {
        preferred
            .iter()
            .find_map(|key| self.files.get(key))
            .or_else(|| self.files.values().next())
            .map(String::as_str)
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct Album {
    pub artist: String,
    pub title: String,
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn from_metadata(meta: AlbumMetadata) -> Self {
        Self {
            artist: meta.artist,
            title: meta.title,
            tracks: meta.tracks.into_iter().map(Track::from_record).collect(),
        }
    }

    /// `<artist>/<album>` relative to the download root, both sanitized.
    pub fn directory(&self) -> PathBuf {
        naming::album_dir(&self.artist, &self.title)
    }
}
