//! Path component sanitization.

/// Characters stripped from every path component (Windows-reserved plus a few
/// that confuse shells and URL-ish tooling).
pub const RESERVED_CHARS: &str = "<>:\"/\\|?*[];=%&";

/// Sanitizes an artist, album or track name for use as a single path component.
///
/// - Replaces `" & "` with `" and "`
/// - Removes every character in [`RESERVED_CHARS`]
///
/// Nothing else is touched: no trimming, no length limit.
pub fn sanitize_component(name: &str) -> String {
    name.replace(" & ", " and ")
        .chars()
        .filter(|c| !RESERVED_CHARS.contains(*c))
        .collect()
}
