//! Safe filename generation utilities

/// Characters that are replaced when building a filename
pub const INVALID_FILENAME_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replace characters that are invalid in filenames with `_`.
///
/// Everything else, unicode included, is kept as-is.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Build `"<artist> - <title>"` from sanitized parts
pub fn track_file_stem(artist: &str, title: &str) -> String {
    format!("{} - {}", sanitize_filename(artist), sanitize_filename(title))
}
