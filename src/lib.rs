//! # covpods
//!
//! Groups coverage output files into pods.
//!
//! Instrumented binaries write one meta-data file per build
//! (`covmeta.<hash>`) and one counter-data file per process
//! (`covcounters.<hash>.<pid>.<sequence>`). A pod is one meta-data file
//! together with every counter-data file carrying the same hash, possibly
//! gathered from several output directories (several runs of the same
//! binary). covpods reconstructs pods from file names alone; it never
//! opens the files.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let pods = covpods::collect_pods(["run1/cover", "run2/cover"], true)?;
//!
//! for pod in &pods {
//!     println!("{} <- {} counter files", pod.meta_file.display(), pod.counter_data_files.len());
//! }
//! # Ok::<(), covpods::PodError>(())
//! ```
//!
//! # Ordering
//!
//! Origins are scanned in the order given; within an origin, entries are
//! scanned in byte-wise file name order. Pods come out in the order their
//! hash was first seen on a meta-data file, and each pod's counter files
//! come out in scan order. Duplicate meta-data files collapse into the
//! first one seen. Counter files whose hash never appears on a meta-data
//! file (orphans) are dropped.
//!
//! # Custom Listers
//!
//! Implement [`Lister`] to collect from something other than the local
//! filesystem:
//!
//! ```rust
//! use std::path::Path;
//! use covpods::{Entry, EntryKind, Lister, PodError};
//!
//! struct FixedLister(Vec<&'static str>);
//!
//! impl Lister for FixedLister {
//!     fn list(&self, dir: &Path) -> Result<Vec<Entry>, PodError> {
//!         Ok(self.0.iter().map(|name| Entry {
//!             path: dir.join(name),
//!             name: name.to_string(),
//!             kind: EntryKind::File,
//!         }).collect())
//!     }
//! }
//!
//! let collection = covpods::collect()
//!     .origin("out")
//!     .lister(FixedLister(vec![
//!         "covcounters.ae7be26cdaa742ca148068d5ac90eaca.42.2",
//!         "covmeta.ae7be26cdaa742ca148068d5ac90eaca",
//!         "covcounters.ae7be26cdaa742ca148068d5ac90eaca.42.1",
//!         "notes.txt",
//!     ]))
//!     .track_origins(true)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(collection.pods.len(), 1);
//! assert_eq!(collection.pods[0].counter_data_files.len(), 2);
//! assert!(collection.pods[0].counter_data_files[0].ends_with("covcounters.ae7be26cdaa742ca148068d5ac90eaca.42.1"));
//! assert_eq!(collection.pods[0].origins, Some(vec![0, 0]));
//! assert_eq!(collection.stats.unrecognized, 1);
//! ```

#![forbid(unsafe_code)]

pub mod classify;

mod builder;
mod engine;
mod entry;
mod error;
mod registry;
mod results;
mod scanner;
mod traits;

use std::path::PathBuf;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::CollectBuilder;
pub use classify::{Classified, FileNaming, HashTag};
pub use entry::{Entry, EntryKind};
pub use error::PodError;
pub use results::{Collection, Pod, ScanStats};
pub use scanner::FsLister;
pub use traits::Lister;

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`CollectBuilder`] to configure and run a collection.
///
/// # Example
///
/// ```rust,no_run
/// let collection = covpods::collect()
///     .origins(["run1/cover", "run2/cover"])
///     .track_origins(true)
///     .collect_orphans(true)
///     .run()?;
///
/// for orphan in &collection.orphans {
///     eprintln!("no meta-data file for {}", orphan.display());
/// }
/// # Ok::<(), covpods::PodError>(())
/// ```
pub fn collect() -> CollectBuilder {
    CollectBuilder::default()
}

/// Collect pods from origin directories using the default file names.
///
/// When `track_origins` is set, every pod's [`Pod::origins`] holds the
/// index into `dirs` of each counter file's directory.
///
/// # Errors
///
/// [`PodError::DirectoryUnreadable`] for the first directory that cannot
/// be listed. No pods are returned.
pub fn collect_pods<I, P>(dirs: I, track_origins: bool) -> Result<Vec<Pod>, PodError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    collect()
        .origins(dirs)
        .track_origins(track_origins)
        .run()
        .map(|c| c.pods)
}

/// Collect pods from an explicit list of files using the default file names.
///
/// Files are classified by name in the order given. [`Pod::origins`] is
/// always `None`. With `warn_orphans`, each orphaned counter file is
/// reported through `tracing`.
pub fn collect_pods_from_files<I, P>(files: I, warn_orphans: bool) -> Result<Vec<Pod>, PodError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    collect()
        .files(files)
        .warn_orphans(warn_orphans)
        .run()
        .map(|c| c.pods)
}
