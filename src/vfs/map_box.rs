//! This module provides a box implementation that keeps its virtual files in memory.

use std::collections::BTreeMap;

use tracing::debug;

use crate::VirtualFile;
use crate::core::{Addable, File, Finder, Haser, Lister, Opener, Result, Walkable, utils};
use crate::error::BoxError;

/// A box that stores virtual files and directory markers in memory, keyed by path.
///
/// `MapBox` implements the whole capability set ([`PackBox`](crate::PackBox)): existence
/// checks, content lookup, listing, walking, opening handles and registration.
///
/// ### Internal state
///
/// * `name` — A label for the box, used in log records only.
///
/// * `entries` — The storage map.
///   - Key: normalized relative path (see below).
///   - Value: the [`VirtualFile`] registered at that path, regular file or directory marker.
///   - Uses `BTreeMap` for deterministic, ascending iteration in `list()` and `walk()`.
///
/// ### Paths
///
/// Every path argument is normalized before it touches the map: `\` becomes `/`, leading
/// `/` and `./` are dropped, `.` segments vanish, `..` removes the previous segment without
/// ever leaving the box, and duplicate or trailing separators collapse. `"/a/b.txt"`,
/// `"a/b.txt"` and `"./a//b.txt"` all name the same entry.
///
/// Directories exist only when registered with [`MapBox::add_dir`]; adding `a/b.txt` does
/// not create an `a` entry.
///
/// ### Walking
///
/// `walk()` visits entries in ascending path order. When the callback answers
/// [`BoxError::SkipDir`] for a directory, nothing under that directory is visited; for a
/// file, the rest of the file's parent directory is skipped (the rest of the walk for a
/// top-level file). Any other error ends the walk and is returned as is.
///
/// ### Thread Safety
///
/// Not thread-safe by itself: mutation takes `&mut self`. Wrap it in a lock for shared
/// mutable access.
///
/// ### Example
///
/// ```
/// use std::io::Read;
/// use vfs_box::{Addable, Finder, MapBox, Opener};
///
/// let mut mb = MapBox::new("assets");
/// mb.add_string("/css/site.css", "body {}").unwrap();
///
/// assert_eq!(mb.find_string("css/site.css").unwrap(), "body {}");
///
/// let mut handle = mb.open("css/site.css").unwrap();
/// let mut css = String::new();
/// handle.read_to_string(&mut css).unwrap();
/// assert_eq!(css, "body {}");
/// ```
#[derive(Debug, Clone)]
pub struct MapBox {
    name: String,
    entries: BTreeMap<String, VirtualFile>,
}

impl MapBox {
    /// Creates an empty box.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered entries, directory markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the entry registered at `path`.
    pub fn get(&self, path: &str) -> Option<&VirtualFile> {
        self.entries.get(&utils::normalize(path))
    }

    /// Registers a directory marker.
    /// Registering an existing directory again is a no-op; a file at `path` is an error.
    pub fn add_dir(&mut self, path: &str) -> Result<()> {
        let key = Self::key(path)?;
        match self.entries.get(&key) {
            Some(existing) if existing.is_dir() => Ok(()),
            Some(_) => Err(BoxError::already_exists(key)),
            None => {
                debug!(box_name = %self.name, path = %key, "registered directory");
                self.entries.insert(key.clone(), VirtualFile::new_dir(key));
                Ok(())
            }
        }
    }

    /// Registers a prebuilt file under its normalized name, replacing an entry of the same kind.
    pub fn add_file(&mut self, file: VirtualFile) -> Result<()> {
        let key = Self::key(file.name())?;
        if self.entries.get(&key).is_some_and(|existing| existing.is_dir() != file.is_dir()) {
            return Err(BoxError::already_exists(key));
        }
        let file = if file.name() == key {
            file
        } else {
            file.renamed(key.clone())
        };
        debug!(box_name = %self.name, path = %key, size = file.len(), "registered file");
        self.entries.insert(key, file);
        Ok(())
    }

    /// Removes the entry at `path`; for a directory, everything under it goes too.
    pub fn remove(&mut self, path: &str) -> Result<()> {
        let key = Self::key(path)?;
        let Some(removed) = self.entries.remove(&key) else {
            return Err(BoxError::not_found(path));
        };
        if removed.is_dir() {
            self.entries.retain(|p, _| !utils::is_under(p, &key));
        }
        debug!(box_name = %self.name, path = %key, "removed entry");
        Ok(())
    }

    /// Normalized key for a mutating operation. The box root itself is not an entry.
    fn key(path: &str) -> Result<String> {
        let key = utils::normalize(path);
        if key.is_empty() {
            return Err(BoxError::invalid_path(path));
        }
        Ok(key)
    }

    fn lookup(&self, path: &str) -> Result<&VirtualFile> {
        self.get(path).ok_or_else(|| BoxError::not_found(path))
    }
}

impl Haser for MapBox {
    fn has(&self, path: &str) -> bool {
        self.entries.contains_key(&utils::normalize(path))
    }
}

impl Finder for MapBox {
    /// Returns a copy of the file content.
    /// A directory marker answers [`BoxError::IsADirectory`].
    fn find(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.lookup(path)?;
        if file.is_dir() {
            return Err(BoxError::is_a_directory(path));
        }
        Ok(file.as_bytes().to_vec())
    }

    fn find_string(&self, path: &str) -> Result<String> {
        let bytes = self.find(path)?;
        String::from_utf8(bytes).map_err(|source| BoxError::InvalidUtf8 {
            path: path.to_string(),
            source,
        })
    }
}

impl Lister for MapBox {
    /// Every registered path in ascending order.
    fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl Walkable for MapBox {
    type Entry = VirtualFile;

    fn walk<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, &Self::Entry) -> Result<()>,
    {
        let mut pruned: Vec<&str> = Vec::new();
        for (path, file) in &self.entries {
            let path = path.as_str();
            if pruned.iter().any(|dir| utils::is_under(path, dir)) {
                continue;
            }
            match visit(path, file) {
                Ok(()) => {}
                Err(BoxError::SkipDir) => {
                    let dir = if file.is_dir() {
                        path
                    } else {
                        utils::parent_dir(path)
                    };
                    if dir == utils::ROOT_MARKER {
                        return Ok(());
                    }
                    pruned.push(dir);
                }
                Err(e) => {
                    debug!(box_name = %self.name, path = %path, error = %e, "walk aborted");
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

impl Opener for MapBox {
    type Handle = VirtualFile;

    /// Opens an independent handle with its own cursor; reads, seeks and writes on it
    /// leave the stored entry alone.
    fn open(&self, path: &str) -> Result<VirtualFile> {
        Ok(self.lookup(path)?.reopen())
    }
}

impl Addable for MapBox {
    fn add_string(&mut self, path: &str, content: &str) -> Result<()> {
        self.add_bytes(path, content.as_bytes())
    }

    /// Registers a file, or replaces the content of the file already registered at `path`.
    fn add_bytes(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let key = Self::key(path)?;
        match self.entries.get_mut(&key) {
            Some(existing) if existing.is_dir() => return Err(BoxError::is_a_directory(key)),
            Some(existing) => existing.replace(content)?,
            None => {
                self.entries
                    .insert(key.clone(), VirtualFile::from_bytes(key.clone(), content));
            }
        }
        debug!(box_name = %self.name, path = %key, size = content.len(), "registered file");
        Ok(())
    }
}
