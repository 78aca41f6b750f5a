//! Metadata extraction from the inline script data of an album page.
//!
//! The page embeds a JavaScript object literal along the lines of:
//!
//! ```text
//!     artist: "AC/DC",
//!     album_title: "Who Made Who",
//!     trackinfo: [{"track_num":1,"title":"...","file":{"mp3-128":"//..."}}, ...],
//! ```
//!
//! Each field is located with a line-bound, greedy pattern; the first match
//! wins. Any missing field is fatal.

mod record;

pub use record::TrackRecord;

use crate::error::ExtractionError;
use regex::Regex;
use std::sync::OnceLock;

/// Everything the album writer needs from a page.
#[derive(Debug, Clone)]
pub struct AlbumMetadata {
    pub artist: String,
    pub title: String,
    pub tracks: Vec<TrackRecord>,
}

struct Patterns {
    artist: Regex,
    album_title: Regex,
    trackinfo: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        artist: string_field("artist"),
        album_title: string_field("album_title"),
        trackinfo: Regex::new(r"trackinfo: (?P<trackinfo>.*),").expect("trackinfo pattern"),
    })
}

/// `<field>: "<value>",` with the value captured under the field's name.
fn string_field(field: &str) -> Regex {
    Regex::new(&format!(r#"{field}: "(?P<{field}>.*)","#)).expect("string field pattern")
}

fn find<'t>(
    re: &Regex,
    text: &'t str,
    field: &'static str,
) -> Result<&'t str, ExtractionError> {
    re.captures(text)
        .and_then(|caps| caps.name(field))
        .map(|m| m.as_str())
        .ok_or(ExtractionError::MissingField(field))
}

/// Decodes JS string escapes (`\"`, `ó`, ...) in a captured value.
/// Falls back to the raw capture if it is not a valid escaped string.
fn unescape(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}

/// Extracts artist, album title and the ordered track list from page text.
pub fn extract_album(page: &str) -> Result<AlbumMetadata, ExtractionError> {
    let p = patterns();
    let artist = unescape(find(&p.artist, page, "artist")?);
    let title = unescape(find(&p.album_title, page, "album_title")?);
    let raw_tracks = find(&p.trackinfo, page, "trackinfo")?;
    let tracks: Vec<TrackRecord> = serde_json::from_str(raw_tracks)?;

    tracing::debug!(
        artist = %artist,
        album = %title,
        tracks = tracks.len(),
        "extracted album metadata"
    );

    Ok(AlbumMetadata {
        artist,
        title,
        tracks,
    })
}
