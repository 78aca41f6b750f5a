//! Local path derivation from album metadata.
//!
//! Albums land in `<artist>/<album>/` and tracks in
//! `<NN> - <title>.mp3`, every component passed through
//! [`sanitize_component`].

mod sanitize;

pub use sanitize::{sanitize_component, RESERVED_CHARS};

use std::path::PathBuf;

/// Extension given to every downloaded track.
pub const TRACK_EXTENSION: &str = "mp3";

/// Filename for a track: two-digit zero-padded number, title, extension.
///
/// - `track_filename(5, "Title")` → `"05 - Title.mp3"`
/// - `track_filename(12, "Title")` → `"12 - Title.mp3"`
pub fn track_filename(number: u32, title: &str) -> String {
    sanitize_component(&format!("{:02} - {}.{}", number, title, TRACK_EXTENSION))
}

/// Album directory relative to the download root: `<artist>/<album>`.
pub fn album_dir(artist: &str, title: &str) -> PathBuf {
    PathBuf::from(sanitize_component(artist)).join(sanitize_component(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn single_digit_track_is_zero_padded() {
        assert_eq!(track_filename(5, "Title"), "05 - Title.mp3");
        assert_eq!(track_filename(0, "Intro"), "00 - Intro.mp3");
    }

    #[test]
    fn two_digit_track_is_unchanged() {
        assert_eq!(track_filename(12, "Title"), "12 - Title.mp3");
        assert_eq!(track_filename(104, "Bonus"), "104 - Bonus.mp3");
    }

    #[test]
    fn track_title_is_sanitized() {
        assert_eq!(
            track_filename(3, "Rock & Roll: Part 1/2?"),
            "03 - Rock and Roll Part 12.mp3"
        );
    }

    #[test]
    fn album_dir_strips_slash() {
        assert_eq!(
            album_dir("AC/DC", "Who Made Who"),
            Path::new("ACDC").join("Who Made Who")
        );
        assert_eq!(album_dir("AC/DC", "Who Made Who"), Path::new("ACDC/Who Made Who"));
    }

    #[test]
    fn album_dir_sanitizes_both_components() {
        assert_eq!(
            album_dir("Belle & Sebastian", "If You're Feeling Sinister?"),
            Path::new("Belle and Sebastian/If You're Feeling Sinister")
        );
    }
}
