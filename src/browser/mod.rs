pub mod entry;
pub mod filter;
pub mod home;
pub mod initial;
pub mod lister;
pub mod sort;

pub use entry::{Entry, FileEntry, FolderEntry, PARENT_DIRECTORY};
pub use home::HomeState;
pub use initial::InitialDirResolver;
pub use lister::FileBrowser;
pub use sort::{FileSortOrder, FolderSortOrder};
