//! Scheme normalization for track URLs.
//!
//! Album pages embed stream URLs protocol-relative (`//host/path`); libcurl
//! wants an absolute URL.

/// Returns `raw` with an explicit scheme.
///
/// - `//host/file.mp3` → `http://host/file.mp3`
/// - `https://host/file.mp3` → unchanged
/// - `host/file.mp3` → `http://host/file.mp3`
pub fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("//") {
        return format!("http:{}", raw);
    }
    match url::Url::parse(raw) {
        Ok(parsed) if parsed.has_host() => raw.to_string(),
        _ => format!("http://{}", raw),
    }
}
