// Home directory bookmark: a single saved path offered as a quick
// navigation target. The menu row for it changes meaning depending on
// where the browser currently is.

use super::lister::FileBrowser;
use std::path::PathBuf;

/// The three states the home bookmark can be in relative to the current
/// directory. Drives which icon and label the menu row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeState {
    /// Currently inside the bookmarked directory.
    AtHome,
    /// A bookmark exists, but the browser is elsewhere.
    SetElsewhere,
    /// No bookmark saved.
    Unset,
}

impl HomeState {
    pub fn icon(&self) -> &'static str {
        match self {
            HomeState::AtHome => "folder-remove",
            HomeState::SetElsewhere => "folder-nav",
            HomeState::Unset => "folder-outline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeState::AtHome => "Remove home directory",
            HomeState::SetElsewhere => "Go to home directory",
            HomeState::Unset => "Set home directory",
        }
    }
}

impl FileBrowser {
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.settings()
            .home_directory
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Bookmark the current directory. No-op when nothing has been listed yet.
    pub fn set_home_dir(&mut self) {
        if let Some(current) = self.current_dir().map(|p| p.to_path_buf()) {
            self.settings_mut().home_directory = Some(current);
        }
    }

    pub fn clear_home_dir(&mut self) {
        self.settings_mut().home_directory = None;
    }

    pub fn has_home_dir(&self) -> bool {
        self.home_dir().is_some()
    }

    /// Path equality between the current directory and the bookmark.
    pub fn at_home_dir(&self) -> bool {
        match (self.current_dir(), self.home_dir()) {
            (Some(current), Some(home)) => current == home,
            _ => false,
        }
    }

    pub fn home_state(&self) -> HomeState {
        if self.at_home_dir() {
            HomeState::AtHome
        } else if self.has_home_dir() {
            HomeState::SetElsewhere
        } else {
            HomeState::Unset
        }
    }
}
