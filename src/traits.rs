use std::path::Path;

use crate::entry::Entry;
use crate::error::PodError;

/// Lists the entries of one origin directory.
///
/// Implement this to collect pods from something other than the local
/// filesystem: an archive, a remote store, or a fixed in-memory listing
/// in tests. [`FsLister`](crate::FsLister) is used when none is set.
///
/// # Ordering
///
/// Listers may return entries in any order. The scanner sorts every
/// listing by byte-wise file name before anything is classified.
///
/// # Error Handling
///
/// A directory that cannot be opened or enumerated must be reported as
/// [`PodError::DirectoryUnreadable`]. The whole collection aborts on the
/// first such error.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use covpods::{Entry, EntryKind, Lister, PodError};
///
/// struct FixedLister(Vec<&'static str>);
///
/// impl Lister for FixedLister {
///     fn list(&self, dir: &Path) -> Result<Vec<Entry>, PodError> {
///         Ok(self.0.iter().map(|name| Entry {
///             path: dir.join(name),
///             name: name.to_string(),
///             kind: EntryKind::File,
///         }).collect())
///     }
/// }
/// ```
pub trait Lister {
    /// Return every entry directly inside `dir`.
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, PodError>;
}
