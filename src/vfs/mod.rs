mod entry;
mod map_box;
mod skip_walker;
mod virtual_file;

pub use entry::{EntryInfo, EntryType, READ_ONLY_MODE};
pub use map_box::MapBox;
pub use skip_walker::{COMMON_SKIP_PREFIXES, SkipWalker, skip_walk};
pub use virtual_file::VirtualFile;
