// The units of a directory listing: folders, files, and the synthetic
// "navigate up" marker that leads every non-root listing.

use crate::tags::TagSummary;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const PARENT_DIRECTORY: &str = "..";

#[derive(Debug, Clone, Serialize)]
pub struct FolderEntry {
    pub path: PathBuf,
    pub name: String,
    pub folder_count: usize,
    pub file_count: usize,
}

// Listings are deduplicated by path, so equality only looks at the path.
impl PartialEq for FolderEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FolderEntry {}

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Display name with the extension stripped.
    pub name: String,
    pub size: u64,
    pub extension: String,
    /// Present whenever an extension was detected; individual fields may
    /// still be empty for untagged files.
    pub tags: Option<TagSummary>,
}

impl PartialEq for FileEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileEntry {}

impl FileEntry {
    pub fn artist(&self) -> Option<&str> {
        self.tags.as_ref().and_then(|t| t.artist.as_deref())
    }

    pub fn album(&self) -> Option<&str> {
        self.tags.as_ref().and_then(|t| t.album.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        self.tags.as_ref().and_then(|t| t.title.as_deref())
    }

    pub fn track_number(&self) -> Option<u32> {
        self.tags.as_ref().and_then(|t| t.track_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Parent(FolderEntry),
    Folder(FolderEntry),
    File(FileEntry),
}

impl Entry {
    /// The synthetic ".." row pointing one level above `directory`.
    pub fn parent_of(directory: &Path) -> Self {
        Entry::Parent(FolderEntry {
            path: directory.join(PARENT_DIRECTORY),
            name: PARENT_DIRECTORY.to_string(),
            folder_count: 0,
            file_count: 0,
        })
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::Parent(folder) | Entry::Folder(folder) => &folder.path,
            Entry::File(file) => &file.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Parent(folder) | Entry::Folder(folder) => &folder.name,
            Entry::File(file) => &file.name,
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Entry::Parent(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }
}
