use std::io::{Read, Seek, Write};

use crate::EntryInfo;
use crate::error::BoxError;

pub type Result<T> = std::result::Result<T, BoxError>;

/// Handle contract shared by every virtual entry: the shape an HTTP file server or any
/// `open`/`read`/`stat` consumer expects from an opened resource.
pub trait File: Read + Write + Seek {
    /// Returns the stable identity key of the entry.
    fn name(&self) -> &str;

    /// Returns a snapshot of the entry metadata.
    fn stat(&self) -> Result<EntryInfo>;

    /// Same as [`File::stat`].
    fn file_info(&self) -> Result<EntryInfo> {
        self.stat()
    }

    /// Lists the entry itself, directory or file. `count` caps the listing, 0 means no cap.
    fn readdir(&self, count: usize) -> Result<Vec<EntryInfo>>;

    /// Releases the handle. Virtual entries hold nothing to release.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Existence check.
pub trait Haser {
    fn has(&self, path: &str) -> bool;
}

/// Direct content retrieval.
pub trait Finder {
    fn find(&self, path: &str) -> Result<Vec<u8>>;
    fn find_string(&self, path: &str) -> Result<String>;
}

/// Enumeration of every registered path.
pub trait Lister {
    fn list(&self) -> Vec<String>;
}

/// Full traversal with a per-entry callback.
///
/// The callback receives the entry path and the entry. Returning `Err(BoxError::SkipDir)`
/// prunes the directory being visited; any other error stops the walk and is returned as is.
pub trait Walkable {
    type Entry: File;

    fn walk<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&str, &Self::Entry) -> Result<()>;
}

/// Opening of independent read/seek/stat handles, as consumed by HTTP-serving glue.
pub trait Opener {
    type Handle: File;

    fn open(&self, path: &str) -> Result<Self::Handle>;
}

/// Registration or replacement of entries.
pub trait Addable {
    fn add_string(&mut self, path: &str, content: &str) -> Result<()>;
    fn add_bytes(&mut self, path: &str, content: &[u8]) -> Result<()>;
}

/// The full capability set of a box.
pub trait PackBox: Haser + Finder + Lister + Walkable + Opener + Addable {}

impl<T> PackBox for T where T: Haser + Finder + Lister + Walkable + Opener + Addable {}

/// Panic-free shorthands kept for callers written against older boxes.
pub trait LegacyBox {
    /// Returns the content as text, or an empty string if it cannot be found or decoded.
    fn string(&self, path: &str) -> String;
    fn must_string(&self, path: &str) -> Result<String>;
    /// Returns the content, or an empty vector if it cannot be found.
    fn bytes(&self, path: &str) -> Vec<u8>;
    fn must_bytes(&self, path: &str) -> Result<Vec<u8>>;
}

impl<T: Finder + ?Sized> LegacyBox for T {
    fn string(&self, path: &str) -> String {
        self.find_string(path).unwrap_or_default()
    }

    fn must_string(&self, path: &str) -> Result<String> {
        self.find_string(path)
    }

    fn bytes(&self, path: &str) -> Vec<u8> {
        self.find(path).unwrap_or_default()
    }

    fn must_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.find(path)
    }
}

pub mod utils {
    /// Marker returned for the parent of a top-level entry.
    pub const ROOT_MARKER: &str = ".";

    /// Normalizes a box key: `/` separators, no leading `/` or `./`, no `.` segments,
    /// `..` pops a segment but never climbs above the box root.
    pub fn normalize(path: &str) -> String {
        let path = path.replace('\\', "/");
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            }
        }
        parts.join("/")
    }

    /// Returns the last segment of `path`, or the root marker for an empty path.
    pub fn base_name(path: &str) -> &str {
        let trimmed = path.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some((_, base)) => base,
            None if trimmed.is_empty() => ROOT_MARKER,
            None => trimmed,
        }
    }

    /// Returns everything before the last segment of `path`, or the root marker for
    /// a top-level entry.
    pub fn parent_dir(path: &str) -> &str {
        let trimmed = path.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some(("", _)) | None => ROOT_MARKER,
            Some((parent, _)) => parent,
        }
    }

    /// Returns true if `path` lies strictly below `dir`.
    pub fn is_under(path: &str, dir: &str) -> bool {
        if dir == ROOT_MARKER {
            return true;
        }
        path.strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Returns true if `path` is the virtual root.
    pub fn is_virtual_root(path: &str) -> bool {
        normalize(path).is_empty()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_normalize() {
            assert_eq!(normalize("a/b.txt"), "a/b.txt");
            assert_eq!(normalize("/a/b.txt"), "a/b.txt");
            assert_eq!(normalize("./a//b.txt"), "a/b.txt");
            assert_eq!(normalize("a/./b/"), "a/b");
            assert_eq!(normalize("a\\b\\c.txt"), "a/b/c.txt");
            assert_eq!(normalize("a/b/../c"), "a/c");
            assert_eq!(normalize("../../a"), "a");
            assert_eq!(normalize("/"), "");
            assert_eq!(normalize(""), "");
        }

        #[test]
        fn test_base_name() {
            assert_eq!(base_name("a/vendor/x.txt"), "x.txt");
            assert_eq!(base_name("a/vendor"), "vendor");
            assert_eq!(base_name("a/vendor/"), "vendor");
            assert_eq!(base_name("x.txt"), "x.txt");
            assert_eq!(base_name(""), ".");
        }

        #[test]
        fn test_parent_dir() {
            assert_eq!(parent_dir("a/vendor/x.txt"), "a/vendor");
            assert_eq!(parent_dir("a/x.txt"), "a");
            assert_eq!(parent_dir("x.txt"), ".");
            assert_eq!(parent_dir("/x.txt"), ".");
        }

        #[test]
        fn test_is_under() {
            assert!(is_under("a/lib/x.txt", "a/lib"));
            assert!(!is_under("a/lib.rs", "a/lib"));
            assert!(!is_under("a/lib", "a/lib"));
            assert!(!is_under("a/library/x", "a/lib"));
            assert!(is_under("anything", "."));
        }

        #[test]
        fn test_is_virtual_root() {
            assert!(is_virtual_root(""));
            assert!(is_virtual_root("/"));
            assert!(is_virtual_root("./"));
            assert!(!is_virtual_root("a"));
        }
    }
}
