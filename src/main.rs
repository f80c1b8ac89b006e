// ampbrowse - browse music folders from the terminal
// Thin front-end over the library: resolve a starting directory, list it,
// print the rows. Filesystem work runs off the async runtime.

use ampbrowse::{Entry, FileBrowser, FileSortOrder, FolderSortOrder, InitialDirResolver, Settings};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ampbrowse", about = "Browse music folders with tag-aware sorting")]
struct Args {
    /// Directory to list; defaults to the resolved initial directory
    path: Option<PathBuf>,

    /// Sort order for files (overrides the saved setting for this run)
    #[arg(long, value_enum)]
    sort_files: Option<FileSortOrder>,

    /// Sort order for folders (overrides the saved setting for this run)
    #[arg(long, value_enum)]
    sort_folders: Option<FolderSortOrder>,

    /// Reverse the file list
    #[arg(long)]
    files_descending: bool,

    /// Reverse the folder list
    #[arg(long)]
    folders_descending: bool,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,

    /// Bookmark the listed directory as home
    #[arg(long)]
    set_home: bool,

    /// Clear the home bookmark and exit
    #[arg(long)]
    clear_home: bool,
}

/// The settings for this run: the saved ones with any CLI overrides
/// applied. Run-scoped overrides never reach the settings file.
fn session_settings(saved: &Settings, args: &Args) -> Settings {
    let mut settings = saved.clone();
    if let Some(order) = args.sort_files {
        settings.file_sort_order = order;
    }
    if let Some(order) = args.sort_folders {
        settings.folder_sort_order = order;
    }
    if args.files_descending {
        settings.files_ascending = false;
    }
    if args.folders_descending {
        settings.folders_ascending = false;
    }
    settings
}

/// Saved settings with only the home bookmark replaced, ready to persist.
fn with_home_bookmark(mut settings: Settings, home: Option<PathBuf>) -> Settings {
    settings.home_directory = home;
    settings
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let saved = Settings::load()?;
    let mut browser = FileBrowser::new(session_settings(&saved, &args));

    if args.clear_home {
        browser.clear_home_dir();
        with_home_bookmark(saved, None).save()?;
        println!("Home bookmark cleared");
        return Ok(());
    }

    let directory = match args.path {
        Some(path) => path,
        None => {
            let resolver = InitialDirResolver::default();
            let settings = browser.settings().clone();
            tokio::task::spawn_blocking(move || resolver.resolve(&settings)).await?
        }
    };

    // Directory listing is blocking I/O; keep it off the main task.
    let (mut browser, entries) = tokio::task::spawn_blocking(move || {
        let entries = browser.list_directory(&directory);
        (browser, entries)
    })
    .await?;

    if args.set_home {
        browser.set_home_dir();
        with_home_bookmark(saved, browser.home_dir()).save()?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        match entry {
            Entry::Parent(_) => println!("../"),
            Entry::Folder(folder) => println!(
                "{}/  ({} folders, {} files)",
                folder.name, folder.folder_count, folder.file_count
            ),
            Entry::File(file) => {
                let label = match (file.artist(), file.title()) {
                    (Some(artist), Some(title)) => format!("{artist} - {title}"),
                    _ => format!("{}.{}", file.name, file.extension),
                };
                println!("{label}  [{} bytes]", file.size);
            }
        }
    }

    let state = browser.home_state();
    println!("\n[{}] {}", state.icon(), state.label());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_apply_to_the_session_only() {
        let saved = Settings::default();
        let args = Args::parse_from([
            "ampbrowse",
            "/music",
            "--files-descending",
            "--sort-files",
            "size",
        ]);

        let session = session_settings(&saved, &args);
        assert!(!session.files_ascending);
        assert_eq!(session.file_sort_order, FileSortOrder::Size);

        // The saved settings stay untouched by the run.
        assert!(saved.files_ascending);
        assert_eq!(saved.file_sort_order, FileSortOrder::Default);
    }

    #[test]
    fn bookmarking_persists_only_the_home_change() {
        let saved = Settings::default();
        let persisted =
            with_home_bookmark(saved.clone(), Some(PathBuf::from("/music")));

        assert_eq!(persisted.home_directory, Some(PathBuf::from("/music")));
        assert_eq!(persisted.file_sort_order, saved.file_sort_order);
        assert_eq!(persisted.folder_sort_order, saved.folder_sort_order);
        assert_eq!(persisted.files_ascending, saved.files_ascending);
        assert_eq!(persisted.folders_ascending, saved.folders_ascending);
    }

    #[test]
    fn clearing_persists_an_unset_bookmark() {
        let mut saved = Settings::default();
        saved.home_directory = Some(PathBuf::from("/music"));

        let persisted = with_home_bookmark(saved, None);
        assert!(persisted.home_directory.is_none());
    }
}
