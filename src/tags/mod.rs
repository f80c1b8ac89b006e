// Tag reading for browser rows
// Pulls just enough metadata out of a file to sort and label it

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// The metadata fields the browser sorts and displays on.
/// Every field is optional - untagged files are normal, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummary {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub track_number: Option<u32>,
}

/// Read a tag summary for an audio file. Dispatches on extension:
/// id3 for MP3, mp4ameta for the MP4 family. Unknown formats and
/// unreadable tags come back empty.
pub fn read_summary(path: &Path) -> TagSummary {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp3") => read_id3(path),
        Some("mp4") | Some("m4a") | Some("aac") => read_mp4(path),
        _ => TagSummary::default(),
    }
}

fn read_id3(path: &Path) -> TagSummary {
    use id3::TagLike;

    match id3::Tag::read_from_path(path) {
        Ok(tag) => TagSummary {
            artist: tag.artist().map(|s| s.to_string()),
            album: tag.album().map(|s| s.to_string()),
            title: tag.title().map(|s| s.to_string()),
            track_number: tag.track(),
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable id3 tag");
            TagSummary::default()
        }
    }
}

fn read_mp4(path: &Path) -> TagSummary {
    match mp4ameta::Tag::read_from_path(path) {
        Ok(tag) => TagSummary {
            artist: tag.artist().map(|s| s.to_string()),
            album: tag.album().map(|s| s.to_string()),
            title: tag.title().map(|s| s.to_string()),
            track_number: tag.track_number().map(|t| t as u32),
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable mp4 tag");
            TagSummary::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn unknown_extension_yields_empty_summary() {
        let summary = read_summary(Path::new("/nowhere/readme.txt"));
        assert_eq!(summary, TagSummary::default());
    }

    #[test]
    fn unreadable_mp3_yields_empty_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("silence.mp3");
        std::fs::write(&path, b"").unwrap();

        let summary = read_summary(&path);
        assert_eq!(summary, TagSummary::default());
    }

    #[test]
    fn reads_back_id3_fields() {
        use id3::TagLike;

        let dir = tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        std::fs::write(&path, b"").unwrap();

        let mut tag = id3::Tag::new();
        tag.set_artist("The Black Keys");
        tag.set_album("El Camino");
        tag.set_title("Lonely Boy");
        tag.set_track(1);
        tag.write_to_path(&path, id3::Version::Id3v24).unwrap();

        let summary = read_summary(&path);
        assert_eq!(summary.artist.as_deref(), Some("The Black Keys"));
        assert_eq!(summary.album.as_deref(), Some("El Camino"));
        assert_eq!(summary.title.as_deref(), Some("Lonely Boy"));
        assert_eq!(summary.track_number, Some(1));
    }
}
