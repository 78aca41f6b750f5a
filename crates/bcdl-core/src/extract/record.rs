//! Track records as they appear in the page's `trackinfo` array.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One element of `trackinfo`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    pub track_num: u32,
    pub title: String,
    /// Encoding quality (e.g. `mp3-128`) → stream URL. `null` for tracks
    /// that are not streamable.
    #[serde(default)]
    pub file: Option<BTreeMap<String, String>>,
}
