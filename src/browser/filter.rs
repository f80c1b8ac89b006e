// Which filesystem children qualify for the browser: directories, or
// files carrying a recognized audio extension.

use std::path::Path;

pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "ogg", "oga", "mp4", "m4a", "aac", "wav",
];

pub fn is_audio_extension(extension: &str) -> bool {
    let normalized = extension.to_ascii_lowercase();
    AUDIO_EXTENSIONS.contains(&normalized.as_str())
}

pub fn qualifies(path: &Path) -> bool {
    path.is_dir() || extension_of(path).is_some_and(|ext| is_audio_extension(&ext))
}

pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// File name without its extension, for display.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("")
        .to_string()
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .to_string()
}
