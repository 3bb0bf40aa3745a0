use std::time::SystemTime;

/// Permission bits reported for every virtual entry: world-readable, not executable.
pub const READ_ONLY_MODE: u32 = 0o444;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// Metadata snapshot of a virtual entry.
///
/// A snapshot is never patched in place: writes to a [`VirtualFile`](crate::VirtualFile)
/// replace it as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    path: String,
    entry_type: EntryType,
    size: u64,
    mod_time: SystemTime,
}

impl EntryInfo {
    /// Metadata of a regular file holding `size` bytes, modified now.
    pub fn file(path: impl Into<String>, size: u64) -> EntryInfo {
        EntryInfo {
            path: path.into(),
            entry_type: EntryType::File,
            size,
            mod_time: SystemTime::now(),
        }
    }

    /// Metadata of an empty directory marker, modified now.
    pub fn directory(path: impl Into<String>) -> EntryInfo {
        EntryInfo {
            path: path.into(),
            entry_type: EntryType::Directory,
            size: 0,
            mod_time: SystemTime::now(),
        }
    }

    /// The same snapshot under another path; size and modification time are kept.
    pub(crate) fn renamed(&self, path: impl Into<String>) -> EntryInfo {
        EntryInfo {
            path: path.into(),
            ..self.clone()
        }
    }

    /// The logical path the entry was created with.
    pub fn name(&self) -> &str {
        &self.path
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mod_time(&self) -> SystemTime {
        self.mod_time
    }

    pub fn mode(&self) -> u32 {
        READ_ONLY_MODE
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}
