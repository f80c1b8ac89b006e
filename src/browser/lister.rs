// The browser itself: loads one directory at a time into an ordered
// listing. All the filesystem work here is blocking - callers dispatch it
// onto a worker thread (the binary uses spawn_blocking).

use super::entry::{Entry, FileEntry, FolderEntry};
use super::filter;
use super::sort;
use crate::config::Settings;
use crate::tags;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct FileBrowser {
    settings: Settings,
    current_dir: Option<PathBuf>,
}

impl FileBrowser {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            current_dir: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// The directory most recently passed to `list_directory`.
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Load `directory` into an ordered listing: parent marker (unless at
    /// the filesystem root), then folders, then files, each list sorted per
    /// the settings. A directory that cannot be enumerated produces an
    /// empty child set rather than an error.
    pub fn list_directory(&mut self, directory: &Path) -> Vec<Entry> {
        self.current_dir = Some(directory.to_path_buf());

        let mut folders: Vec<FolderEntry> = Vec::new();
        let mut files: Vec<FileEntry> = Vec::new();

        for child in qualifying_children(directory) {
            if child.is_dir() {
                if let Some(folder) = folder_entry(&child) {
                    // First occurrence wins; repeats are dropped.
                    if !folders.contains(&folder) {
                        folders.push(folder);
                    }
                }
            } else if let Some(file) = file_entry(&child) {
                if !files.contains(&file) {
                    files.push(file);
                }
            }
        }

        debug!(
            path = %directory.display(),
            folders = folders.len(),
            files = files.len(),
            "listed directory"
        );

        sort::sort_folders(&mut folders, self.settings.folder_sort_order);
        sort::sort_files(&mut files, self.settings.file_sort_order);
        if !self.settings.folders_ascending {
            folders.reverse();
        }
        if !self.settings.files_ascending {
            files.reverse();
        }

        let mut entries = Vec::with_capacity(folders.len() + files.len() + 1);
        if !is_filesystem_root(directory) {
            entries.push(Entry::parent_of(directory));
        }
        entries.extend(folders.into_iter().map(Entry::Folder));
        entries.extend(files.into_iter().map(Entry::File));
        entries
    }
}

/// Immediate qualifying children of `dir`. Enumeration errors (missing
/// directory, permission denied) degrade to an empty set.
fn qualifying_children(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|path| filter::qualifies(path))
        .collect()
}

/// Build a folder row, counting the folder's own immediate qualifying
/// children (one level, not recursive). Folders with nothing qualifying
/// inside are left out of the listing entirely.
fn folder_entry(path: &Path) -> Option<FolderEntry> {
    let mut folder_count = 0;
    let mut file_count = 0;
    for child in qualifying_children(path) {
        if child.is_dir() {
            folder_count += 1;
        } else {
            file_count += 1;
        }
    }

    if folder_count == 0 && file_count == 0 {
        return None;
    }

    Some(FolderEntry {
        path: path.to_path_buf(),
        name: filter::file_name(path),
        folder_count,
        file_count,
    })
}

/// Build a file row. Files without a detectable extension are skipped;
/// everything else gets a tag summary attached.
fn file_entry(path: &Path) -> Option<FileEntry> {
    let extension = filter::extension_of(path)?;

    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    Some(FileEntry {
        path: path.to_path_buf(),
        name: filter::display_name(path),
        size,
        extension,
        tags: Some(tags::read_summary(path)),
    })
}

// Only a path with no parent at all is the filesystem root. A relative
// single-component path like "music" has an empty parent, and still gets
// its ".." marker.
fn is_filesystem_root(directory: &Path) -> bool {
    directory.parent().is_none()
}
