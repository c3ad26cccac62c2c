use std::path::PathBuf;

use crate::classify::{FileNaming, DEFAULT_COUNTER_PREFIX, DEFAULT_META_PREFIX};
use crate::engine::{run, EngineOptions, Input};
use crate::error::PodError;
use crate::results::Collection;
use crate::scanner::FsLister;
use crate::traits::Lister;

// ---------------------------------------------------------------------------
// CollectBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a pod collection.
///
/// Created via [`covpods::collect()`](crate::collect). Configure with chained
/// builder methods, then call [`run()`](CollectBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let collection = covpods::collect()
///     .origins(["run1/cover", "run2/cover"])
///     .track_origins(true)
///     .warn_orphans(true)
///     .run()?;
/// ```
pub struct CollectBuilder {
    origins:         Vec<PathBuf>,
    files:           Vec<PathBuf>,
    lister:          Option<Box<dyn Lister>>,
    meta_prefix:     String,
    counter_prefix:  String,
    track_origins:   bool,
    warn_orphans:    bool,
    collect_orphans: bool,
}

impl Default for CollectBuilder {
    fn default() -> Self {
        Self {
            origins:         Vec::new(),
            files:           Vec::new(),
            lister:          None,
            meta_prefix:     DEFAULT_META_PREFIX.to_string(),
            counter_prefix:  DEFAULT_COUNTER_PREFIX.to_string(),
            track_origins:   false,
            warn_orphans:    false,
            collect_orphans: false,
        }
    }
}

impl CollectBuilder {
    // ── Input ─────────────────────────────────────────────────────────────

    /// Append one origin directory. Its index is its position among all
    /// origins added so far.
    pub fn origin(mut self, dir: impl Into<PathBuf>) -> Self {
        self.origins.push(dir.into());
        self
    }

    /// Append several origin directories, in iteration order.
    pub fn origins<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.origins.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Collect from explicit file paths instead of listing directories.
    ///
    /// Each path is classified by its file name, in iteration order.
    /// Origin tracking does not apply. Cannot be combined with origins.
    pub fn files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Set a custom directory lister. Defaults to [`FsLister`].
    pub fn lister(mut self, l: impl Lister + 'static) -> Self {
        self.lister = Some(Box::new(l));
        self
    }

    // ── Naming ────────────────────────────────────────────────────────────

    /// Prefix of meta-data file names. Defaults to `covmeta`.
    pub fn meta_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.meta_prefix = prefix.into();
        self
    }

    /// Prefix of counter-data file names. Defaults to `covcounters`.
    pub fn counter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.counter_prefix = prefix.into();
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Record, per counter file, the index of the origin it came from
    /// in [`Pod::origins`](crate::Pod::origins).
    pub fn track_origins(mut self, yes: bool) -> Self {
        self.track_origins = yes;
        self
    }

    /// Emit a `tracing` warning for every orphaned counter file.
    ///
    /// Orphans are dropped either way; this never turns them into an error.
    pub fn warn_orphans(mut self, yes: bool) -> Self {
        self.warn_orphans = yes;
        self
    }

    /// Collect orphaned counter file paths into [`Collection::orphans`].
    pub fn collect_orphans(mut self, yes: bool) -> Self {
        self.collect_orphans = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the collection and return the pods.
    ///
    /// Blocks until every origin has been listed.
    ///
    /// # Errors
    ///
    /// Returns `Err` for invalid configuration (bad prefix, origins mixed
    /// with files) before touching the filesystem, and
    /// [`PodError::DirectoryUnreadable`] for the first origin that cannot
    /// be listed. No pods are returned in either case.
    pub fn run(self) -> Result<Collection, PodError> {
        let naming = FileNaming::new(self.meta_prefix, self.counter_prefix)?;

        let input = match (self.origins.is_empty(), self.files.is_empty()) {
            (false, false) => return Err(PodError::MixedInputs),
            (true, false)  => Input::Files(self.files),
            _              => Input::Origins(self.origins),
        };

        let lister: Box<dyn Lister> = match self.lister {
            Some(l) => l,
            None    => Box::new(FsLister),
        };

        run(EngineOptions {
            input,
            naming,
            lister,
            track_origins:   self.track_origins,
            warn_orphans:    self.warn_orphans,
            collect_orphans: self.collect_orphans,
        })
    }
}
