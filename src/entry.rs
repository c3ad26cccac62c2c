use std::path::PathBuf;

/// A single item produced by a [`Lister`](crate::traits::Lister) for one origin directory.
///
/// Entries carry only names and kinds. Nothing in this crate opens or reads
/// the files they point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path to the entry: the origin directory joined with `name`.
    pub path: PathBuf,

    /// The entry's file name. This is what gets classified.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,
}

/// The kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory. Dropped by the scanner before classification.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}
