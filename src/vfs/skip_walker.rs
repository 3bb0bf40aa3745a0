//! Traversal that prunes conventionally ignored subtrees.
//!
//! A [`SkipWalker`] decorates any [`Walkable`] and answers the prune signal for every entry
//! whose directory name starts with one of its skip prefixes, so the caller's callback
//! never sees hidden, private or dependency directories.

use tracing::trace;

use crate::core::{File, Result, Walkable, utils};
use crate::error::BoxError;

/// Prefixes skipped when no list is given: hidden and private directories plus the
/// two usual dependency directories.
pub const COMMON_SKIP_PREFIXES: &[&str] = &[".", "_", "node_modules", "vendor"];

/// A [`Walkable`] that filters another one.
///
/// For each entry the wrapped walk yields, the comparison segment is the entry's own name
/// for a directory and its parent directory's name for a file. The segment is lower-cased
/// and prefix-matched against the lower-cased skip prefixes (`"vendor"` also skips
/// `"vendor2"`). Top-level files have no parent segment and are never skipped.
///
/// A match answers the prune signal ([`BoxError::SkipDir`]) to the wrapped walk; otherwise
/// the caller's callback runs and its result, prune or abort included, is handed back
/// unchanged. Entries arrive in the wrapped walk's order.
pub struct SkipWalker<'w, W> {
    walker: &'w W,
    prefixes: Vec<String>,
}

impl<'w, W: Walkable> SkipWalker<'w, W> {
    /// Wraps `walker` with [`COMMON_SKIP_PREFIXES`].
    pub fn new(walker: &'w W) -> Self {
        Self::with_prefixes(walker, COMMON_SKIP_PREFIXES)
    }

    /// Wraps `walker` with custom prefixes, which replace the defaults entirely.
    /// An empty list falls back to [`COMMON_SKIP_PREFIXES`].
    pub fn with_prefixes<I, S>(walker: &'w W, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes: Vec<String> = prefixes
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .collect();
        if prefixes.is_empty() {
            prefixes = COMMON_SKIP_PREFIXES.iter().map(|p| p.to_lowercase()).collect();
        }
        Self { walker, prefixes }
    }

    /// The lower-cased prefixes in effect.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Returns the prefix that excludes the entry at `path`, if any.
    pub fn matching_prefix(&self, path: &str, is_dir: bool) -> Option<&str> {
        let segment = if is_dir {
            utils::base_name(path)
        } else {
            utils::base_name(utils::parent_dir(path))
        };
        if segment == utils::ROOT_MARKER {
            return None;
        }
        let segment = segment.to_lowercase();
        self.prefixes
            .iter()
            .find(|prefix| segment.starts_with(prefix.as_str()))
            .map(String::as_str)
    }
}

impl<W: Walkable> Walkable for SkipWalker<'_, W> {
    type Entry = W::Entry;

    fn walk<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, &Self::Entry) -> Result<()>,
    {
        self.walker.walk(|path, entry| {
            let info = entry.file_info()?;
            if let Some(prefix) = self.matching_prefix(path, info.is_dir()) {
                trace!(path, prefix, "pruning skipped subtree");
                return Err(BoxError::SkipDir);
            }
            visit(path, entry)
        })
    }
}

/// Walks `walker`, calling `visit` for every entry outside the skipped subtrees.
/// An empty `prefixes` slice means [`COMMON_SKIP_PREFIXES`].
pub fn skip_walk<W, S, F>(walker: &W, prefixes: &[S], visit: F) -> Result<()>
where
    W: Walkable,
    S: AsRef<str>,
    F: FnMut(&str, &W::Entry) -> Result<()>,
{
    SkipWalker::with_prefixes(walker, prefixes).walk(visit)
}
