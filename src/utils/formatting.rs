//! Formatting utilities for crab-jukebox
//!
//! This module provides functions for formatting the strings shown in labels
//! and playlist rows.

/// Formats the elapsed/total time label, e.g. `1:05/3:59`
pub fn format_time_label(current: &str, total: &str) -> String {
    format!("{current}/{total}")
}

/// Formats the volume label, e.g. `Vol: 40%`
pub fn format_volume_label(volume: u8) -> String {
    format!("Vol: {volume}%")
}

/// Formats a playlist row
///
/// # Arguments
/// * `title` - The track title, possibly empty
/// * `artist` - The track artist, possibly empty
/// * `file` - The file path, used when the track carries no title
///
/// # Returns
/// Returns `artist - title`, the bare title, or the file name
pub fn format_track_entry(title: &str, artist: &str, file: &str) -> String {
    match (title.trim().is_empty(), artist.trim().is_empty()) {
        (false, false) => format!("{artist} - {title}"),
        (false, true) => title.to_string(),
        _ => file.rsplit('/').next().unwrap_or(file).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_labels() {
        assert_eq!(format_time_label("1:05", "3:59"), "1:05/3:59");
        assert_eq!(format_volume_label(40), "Vol: 40%");
    }

    #[test]
    fn test_format_track_entry() {
        assert_eq!(
            format_track_entry("Blue Moon", "Elvis Presley", "elvis/blue_moon.flac"),
            "Elvis Presley - Blue Moon"
        );
        assert_eq!(format_track_entry("Blue Moon", "", "x.flac"), "Blue Moon");
        assert_eq!(
            format_track_entry("", "Elvis Presley", "elvis/blue_moon.flac"),
            "blue_moon.flac"
        );
    }
}
