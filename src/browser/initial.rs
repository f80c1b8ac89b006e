// Picks a sensible starting directory for the browser. A saved home
// bookmark wins; otherwise a best-effort probe walks toward wherever the
// music is likely to live. Blocking I/O - run on a worker thread.

use crate::config::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct InitialDirResolver {
    root: PathBuf,
    /// The platform's external-storage directory, `None` when nothing is
    /// mounted. Injectable so tests can stage their own tree.
    external_storage: Option<PathBuf>,
}

impl Default for InitialDirResolver {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
            external_storage: dirs::home_dir(),
        }
    }
}

impl InitialDirResolver {
    pub fn new(root: PathBuf, external_storage: Option<PathBuf>) -> Self {
        Self {
            root,
            external_storage,
        }
    }

    /// Heuristic scan, in priority order:
    /// 1. an existing bookmarked home directory;
    /// 2. a root child named like "storage", then an "extsdcard" inside it;
    /// 3. the mounted external-storage directory;
    /// 4. finally, descend into a "music" child when one is present.
    /// No match at a step leaves the directory wherever the scan reached.
    pub fn resolve(&self, settings: &Settings) -> PathBuf {
        if let Some(home) = settings
            .home_directory
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
        {
            if home.exists() {
                return home.clone();
            }
            debug!(path = %home.display(), "bookmarked home no longer exists");
        }

        let mut dir = self.root.clone();

        if let Some(storage) = child_containing(&dir, "storage") {
            dir = storage;
            if let Some(sdcard) = child_containing(&dir, "extsdcard") {
                dir = sdcard;
            } else if let Some(external) = &self.external_storage {
                dir = external.clone();
            }
        } else if let Some(external) = &self.external_storage {
            dir = external.clone();
        }

        if let Some(music) = child_containing(&dir, "music") {
            dir = music;
        }

        dir
    }
}

/// First immediate sub-directory whose name contains `needle`,
/// case-insensitive. Enumeration failures read as "no match".
fn child_containing(dir: &Path, needle: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.to_lowercase().contains(needle))
            .unwrap_or(false);
        if matches {
            return Some(path);
        }
    }
    None
}
