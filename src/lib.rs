//! In-memory virtual files and boxes behind the same contract as real files.
//!
//! ### Overview
//!
//! `vfs-box` lets code that expects to open, read and stat files work against embedded or
//! synthetic content instead. It provides:
//!
//! - [`VirtualFile`]: a named in-memory entry implementing `Read`, `Write` and `Seek`, with a
//!   read cursor that rewinds itself after end-of-content and whole-content writes.
//! - [`EntryInfo`]: the metadata snapshot (name, size, modification time, directory flag,
//!   fixed read-only mode) of an entry.
//! - The box capability traits ([`Haser`], [`Finder`], [`Lister`], [`Walkable`], [`Opener`],
//!   [`Addable`], aggregated as [`PackBox`]) that containers implement to be queried,
//!   traversed and served.
//! - [`SkipWalker`] / [`skip_walk`]: a traversal decorator that prunes hidden, private and
//!   dependency directories ([`COMMON_SKIP_PREFIXES`]) or any prefixes you choose.
//! - [`MapBox`]: a ready-made in-memory box implementing the whole capability set.
//!
//! **Key ideas**:
//! - **Same contract as real files**: handles plug into anything written against `std::io`.
//! - **Explicit prune signal**: walk callbacks answer [`BoxError::SkipDir`] to skip a
//!   directory, any other error aborts the walk and is returned untouched.
//! - **No disk I/O**: everything lives in memory and completes synchronously.

mod core;
mod error;
mod vfs;

pub use crate::core::{
    Addable, File, Finder, Haser, LegacyBox, Lister, Opener, PackBox, Result, Walkable, utils,
};
pub use crate::error::BoxError;
pub use crate::vfs::{
    COMMON_SKIP_PREFIXES, EntryInfo, EntryType, MapBox, READ_ONLY_MODE, SkipWalker,
    VirtualFile, skip_walk,
};
