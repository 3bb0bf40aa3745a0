//! A single in-memory file with an auto-rewinding read cursor.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom, Write};

use tracing::trace;

use crate::EntryInfo;
use crate::core::{File, Result};
use crate::error::BoxError;

/// An in-memory stand-in for a filesystem file.
///
/// The file owns its content exclusively and behaves like an opened file with a few
/// deliberate differences from a plain stream:
///
/// * **Auto-rewind.** A read issued with the cursor at the end of the content returns
///   `Ok(0)` and moves the cursor back to the start, so the next read begins a new pass.
///   `read_to_end` can therefore be called repeatedly and yields the whole content each time.
/// * **Whole-content writes.** Every `write` replaces the entire content with the given
///   buffer (nothing is appended), resets the cursor and replaces the metadata snapshot.
/// * **Restricted seeking.** Only `SeekFrom::Start(0)` is accepted; anything else fails with
///   [`io::ErrorKind::Unsupported`] and leaves the cursor where it was.
///
/// Directory markers hold no content: reads yield zero bytes and writes are discarded.
///
/// ### Thread Safety
///
/// There is no internal locking. Reads, writes and seeks take `&mut self`, so each file
/// has one user at a time; share it behind a lock if needed, or hand out independent
/// copies with [`VirtualFile::reopen`].
///
/// ### Example
///
/// ```
/// use std::io::{Read, Write};
/// use vfs_box::VirtualFile;
///
/// let mut file = VirtualFile::from_bytes("greeting.txt", "hi");
/// file.write_all(b"Hello").unwrap();
///
/// let mut first = String::new();
/// file.read_to_string(&mut first).unwrap();
/// let mut second = String::new();
/// file.read_to_string(&mut second).unwrap();
/// assert_eq!(first, "Hello");
/// assert_eq!(second, "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct VirtualFile {
    name: String,
    content: Vec<u8>,
    pos: usize,
    info: EntryInfo,
}

impl VirtualFile {
    /// Creates a file by draining `source` right away.
    /// A failing source surfaces as [`BoxError::Io`].
    pub fn new<R: Read>(name: impl Into<String>, mut source: R) -> Result<VirtualFile> {
        let mut content = Vec::new();
        source.read_to_end(&mut content)?;
        Ok(Self::from_bytes(name, content))
    }

    /// Creates a file that takes ownership of `content`.
    pub fn from_bytes(name: impl Into<String>, content: impl Into<Vec<u8>>) -> VirtualFile {
        let name = name.into();
        let content = content.into();
        VirtualFile {
            info: EntryInfo::file(name.clone(), content.len() as u64),
            name,
            content,
            pos: 0,
        }
    }

    /// Creates an empty directory marker.
    pub fn new_dir(name: impl Into<String>) -> VirtualFile {
        let name = name.into();
        VirtualFile {
            info: EntryInfo::directory(name.clone()),
            name,
            content: Vec::new(),
            pos: 0,
        }
    }

    /// Returns an independent copy with its own cursor at the start.
    pub fn reopen(&self) -> VirtualFile {
        VirtualFile {
            name: self.name.clone(),
            content: self.content.clone(),
            pos: 0,
            info: self.info.clone(),
        }
    }

    /// Replaces the whole content with `buf`, even when `buf` is empty.
    ///
    /// The cursor goes back to the start and the metadata is refreshed. On a directory marker
    /// the bytes are discarded. If the new buffer cannot be allocated the old content stays.
    pub fn replace(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.info.is_dir() {
            trace!(name = %self.name, len = buf.len(), "discarding write to directory marker");
            return Ok(());
        }

        let mut content = Vec::new();
        content
            .try_reserve_exact(buf.len())
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        content.extend_from_slice(buf);

        self.content = content;
        self.pos = 0;
        self.info = EntryInfo::file(self.name.clone(), buf.len() as u64);
        Ok(())
    }

    /// Moves the file under `name`, keeping its content and metadata snapshot.
    pub(crate) fn renamed(self, name: String) -> VirtualFile {
        let info = self.info.renamed(name.clone());
        VirtualFile {
            name,
            content: self.content,
            pos: 0,
            info,
        }
    }

    /// Borrows the current metadata snapshot.
    pub fn info(&self) -> &EntryInfo {
        &self.info
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_dir(&self) -> bool {
        self.info.is_dir()
    }
}

impl Read for VirtualFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.content.len() {
            // EOF: rewind so the next call starts a fresh pass
            self.pos = 0;
            return Ok(0);
        }
        let remaining = &self.content[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for VirtualFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.replace(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for VirtualFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Start(0) => {
                self.pos = 0;
                Ok(0)
            }
            other => Err(BoxError::UnsupportedSeek(other).into()),
        }
    }
}

impl File for VirtualFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self) -> Result<EntryInfo> {
        Ok(self.info.clone())
    }

    fn readdir(&self, count: usize) -> Result<Vec<EntryInfo>> {
        let mut listing = vec![self.info.clone()];
        if count > 0 {
            listing.truncate(count);
        }
        Ok(listing)
    }
}

impl fmt::Display for VirtualFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.content))
    }
}
