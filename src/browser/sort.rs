// Listing order. Each mode is one composite comparator with an explicit
// key-priority chain; the ascending flags reverse the finished list, they
// never change the comparator itself.

use super::entry::{FileEntry, FolderEntry};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FolderSortOrder {
    /// Name, case-insensitive.
    #[default]
    Default,
    /// Sub-folder count first, then contained-file count, both descending.
    Count,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FileSortOrder {
    /// Artist, then album, then track number.
    #[default]
    Default,
    /// Byte size, largest first.
    Size,
    FileName,
    ArtistName,
    AlbumName,
    TrackName,
}

pub fn sort_folders(folders: &mut [FolderEntry], order: FolderSortOrder) {
    match order {
        FolderSortOrder::Default => {
            folders.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));
        }
        FolderSortOrder::Count => {
            folders.sort_by(|a, b| {
                b.folder_count
                    .cmp(&a.folder_count)
                    .then(b.file_count.cmp(&a.file_count))
            });
        }
    }
}

pub fn sort_files(files: &mut [FileEntry], order: FileSortOrder) {
    match order {
        FileSortOrder::Default => {
            files.sort_by(|a, b| {
                compare_optional(a.artist(), b.artist())
                    .then_with(|| compare_optional(a.album(), b.album()))
                    .then_with(|| {
                        a.track_number()
                            .unwrap_or(0)
                            .cmp(&b.track_number().unwrap_or(0))
                    })
            });
        }
        FileSortOrder::Size => {
            files.sort_by(|a, b| b.size.cmp(&a.size));
        }
        FileSortOrder::FileName => {
            files.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));
        }
        FileSortOrder::ArtistName => {
            files.sort_by(|a, b| compare_optional(a.artist(), b.artist()));
        }
        FileSortOrder::AlbumName => {
            files.sort_by(|a, b| compare_optional(a.album(), b.album()));
        }
        FileSortOrder::TrackName => {
            files.sort_by(|a, b| compare_optional(a.title(), b.title()));
        }
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Missing metadata sorts after any present value; two missing values tie.
fn compare_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_ignore_case(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagSummary;
    use std::path::PathBuf;

    fn folder(name: &str, folder_count: usize, file_count: usize) -> FolderEntry {
        FolderEntry {
            path: PathBuf::from(format!("/music/{name}")),
            name: name.to_string(),
            folder_count,
            file_count,
        }
    }

    fn file(
        name: &str,
        size: u64,
        artist: Option<&str>,
        album: Option<&str>,
        title: Option<&str>,
        track_number: Option<u32>,
    ) -> FileEntry {
        FileEntry {
            path: PathBuf::from(format!("/music/{name}.mp3")),
            name: name.to_string(),
            size,
            extension: "mp3".to_string(),
            tags: Some(TagSummary {
                artist: artist.map(String::from),
                album: album.map(String::from),
                title: title.map(String::from),
                track_number,
            }),
        }
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn folder_default_is_case_insensitive_name() {
        let mut folders = vec![folder("zebra", 0, 1), folder("Alpha", 0, 1), folder("beta", 0, 1)];
        sort_folders(&mut folders, FolderSortOrder::Default);
        let order: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(order, ["Alpha", "beta", "zebra"]);
    }

    #[test]
    fn folder_count_prefers_folder_count_over_file_count() {
        let mut folders = vec![
            folder("few-folders", 1, 50),
            folder("many-folders", 3, 1),
            folder("many-files", 1, 99),
        ];
        sort_folders(&mut folders, FolderSortOrder::Count);
        let order: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(order, ["many-folders", "many-files", "few-folders"]);
    }

    #[test]
    fn size_sorts_largest_first() {
        let mut files = vec![
            file("small", 10, None, None, None, None),
            file("large", 3000, None, None, None, None),
            file("medium", 200, None, None, None, None),
        ];
        sort_files(&mut files, FileSortOrder::Size);
        assert_eq!(names(&files), ["large", "medium", "small"]);
    }

    #[test]
    fn default_orders_by_artist_album_track() {
        let mut files = vec![
            file("c", 0, Some("Beta"), Some("First"), None, Some(1)),
            file("d", 0, Some("Alpha"), Some("Second"), None, Some(1)),
            file("a", 0, Some("Alpha"), Some("First"), None, Some(2)),
            file("b", 0, Some("Alpha"), Some("First"), None, Some(1)),
        ];
        sort_files(&mut files, FileSortOrder::Default);
        assert_eq!(names(&files), ["b", "a", "d", "c"]);
    }

    #[test]
    fn default_sort_is_idempotent() {
        let mut files = vec![
            file("x", 0, Some("Beta"), None, None, Some(4)),
            file("y", 0, Some("Alpha"), Some("First"), None, Some(2)),
            file("z", 0, None, None, None, None),
        ];
        sort_files(&mut files, FileSortOrder::Default);
        let once = names(&files).into_iter().map(String::from).collect::<Vec<_>>();
        sort_files(&mut files, FileSortOrder::Default);
        assert_eq!(names(&files), once);
    }

    #[test]
    fn missing_metadata_sorts_after_present_values() {
        let mut files = vec![
            file("untagged", 0, None, None, None, None),
            file("tagged", 0, Some("Zz Top"), None, None, None),
        ];
        sort_files(&mut files, FileSortOrder::ArtistName);
        assert_eq!(names(&files), ["tagged", "untagged"]);

        // A reversal (descending direction) puts the untagged entry first.
        files.reverse();
        assert_eq!(names(&files), ["untagged", "tagged"]);
    }

    #[test]
    fn both_missing_compare_equal_and_keep_their_order() {
        let mut files = vec![
            file("first", 0, None, None, None, None),
            file("second", 0, None, None, None, None),
        ];
        sort_files(&mut files, FileSortOrder::AlbumName);
        assert_eq!(names(&files), ["first", "second"]);
    }

    #[test]
    fn track_name_ignores_case() {
        let mut files = vec![
            file("b", 0, None, None, Some("take me in"), None),
            file("a", 0, None, None, Some("Beautiful People"), None),
        ];
        sort_files(&mut files, FileSortOrder::TrackName);
        assert_eq!(names(&files), ["a", "b"]);
    }
}
