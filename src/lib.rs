// ampbrowse - music folder browser
// Lists audio files and sub-folders one directory at a time, with
// tag-aware sorting and a bookmarked home directory.

pub mod browser; // directory listing, sorting, home bookmark
pub mod config; // settings and preferences
pub mod tags; // artist/album/track metadata for browser rows

// Export the stuff callers actually use
pub use browser::{
    Entry, FileBrowser, FileEntry, FileSortOrder, FolderEntry, FolderSortOrder, HomeState,
    InitialDirResolver,
};
pub use config::Settings;
pub use tags::TagSummary;
