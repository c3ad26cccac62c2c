use std::path::PathBuf;
use std::time::Instant;

use crate::classify::{Classified, FileNaming};
use crate::error::PodError;
use crate::registry::{CounterFileEntry, MetaFileEntry, PodRegistry};
use crate::results::{Collection, ScanStats};
use crate::scanner::{scan_origin, Origin};
use crate::traits::Lister;

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// What to collect from.
pub(crate) enum Input {
    /// Origin directories, listed in this order.
    Origins(Vec<PathBuf>),

    /// Explicit file paths, classified in this order. No listing happens.
    Files(Vec<PathBuf>),
}

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub input:           Input,
    pub naming:          FileNaming,
    pub lister:          Box<dyn Lister>,
    pub track_origins:   bool,
    pub warn_orphans:    bool,
    pub collect_orphans: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Scan, classify, register and finalize in one synchronous pass.
///
/// Origins are processed strictly in input order; that order decides both
/// pod order and the origin index recorded per counter file. The first
/// unreadable origin aborts the call with no partial result.
pub(crate) fn run(opts: EngineOptions) -> Result<Collection, PodError> {
    let start = Instant::now();

    let mut registry = PodRegistry::default();
    let mut stats = ScanStats::default();

    let track_origins = match &opts.input {
        Input::Origins(dirs) => {
            for (index, path) in dirs.iter().enumerate() {
                let origin = Origin { index, path: path.as_path() };
                for entry in scan_origin(opts.lister.as_ref(), &origin)? {
                    observe(&mut registry, &mut stats, &opts.naming, &entry.name, entry.path, index);
                }
                stats.origins += 1;
            }
            opts.track_origins
        }
        Input::Files(files) => {
            for path in files {
                // A path ending in `..` has no file name; it still counts as unrecognized.
                let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                observe(&mut registry, &mut stats, &opts.naming, &name, path.clone(), 0);
            }
            false
        }
    };

    let finalized = registry.finalize(track_origins);

    if opts.warn_orphans {
        for orphan in &finalized.orphans {
            tracing::warn!(
                path = %orphan.path.display(),
                tag = %orphan.tag,
                "skipping orphaned counter file"
            );
        }
    }

    let orphan_count = finalized.orphans.len();
    let orphans = if opts.collect_orphans {
        finalized.orphans.into_iter().map(|c| c.path).collect()
    } else {
        Vec::new()
    };

    stats.duration = start.elapsed();

    tracing::debug!(
        pods = finalized.pods.len(),
        orphans = orphan_count,
        entries = stats.entries,
        unrecognized = stats.unrecognized,
        "pod collection complete"
    );

    Ok(Collection {
        pods: finalized.pods,
        orphans,
        stats,
    })
}

fn observe(
    registry: &mut PodRegistry,
    stats:    &mut ScanStats,
    naming:   &FileNaming,
    name:     &str,
    path:     PathBuf,
    origin:   usize,
) {
    stats.entries += 1;

    match naming.classify(name) {
        Classified::Meta(tag) => {
            stats.meta_files += 1;
            if !registry.observe_meta(MetaFileEntry { tag, path }) {
                stats.duplicate_meta_files += 1;
                tracing::trace!(%tag, origin, "duplicate meta file");
            }
        }
        Classified::Counter { tag, pid, sequence } => {
            stats.counter_files += 1;
            registry.observe_counter(CounterFileEntry { tag, pid, sequence, path, origin });
        }
        Classified::Unrecognized => {
            stats.unrecognized += 1;
            tracing::trace!(name, "unrecognized entry");
        }
    }
}
