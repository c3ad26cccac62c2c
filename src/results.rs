use std::path::PathBuf;
use std::time::Duration;

/// A meta-data file together with every counter-data file that shares its
/// hash tag, possibly drawn from several origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    /// The representative meta-data file: the first one seen for this tag.
    pub meta_file: PathBuf,

    /// Counter-data files in scan order (origin order, then file name order).
    /// May be empty.
    pub counter_data_files: Vec<PathBuf>,

    /// `origins[i]` is the index, in the caller's input list, of the origin
    /// `counter_data_files[i]` was found in.
    /// Only `Some` if `.track_origins(true)` was set on the builder.
    pub origins: Option<Vec<usize>>,
}

/// The output of a completed collection.
///
/// `orphans` is opt-in. Enable it on the builder with `.collect_orphans(true)`.
#[derive(Debug)]
pub struct Collection {
    /// Pods in the order their hash tag was first seen as a meta file.
    pub pods: Vec<Pod>,

    /// Counter-data files whose hash tag never matched a meta file.
    /// Only populated if `.collect_orphans(true)` was set on the builder.
    pub orphans: Vec<PathBuf>,

    /// Scan statistics.
    pub stats: ScanStats,
}

/// Counts for a completed collection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// Origin directories listed.
    pub origins: usize,

    /// Entries classified, after directories were dropped.
    pub entries: usize,

    /// Entries matching the meta-data grammar, duplicates included.
    pub meta_files: usize,

    /// Entries matching the counter-data grammar, orphans included.
    pub counter_files: usize,

    /// Entries matching neither grammar.
    pub unrecognized: usize,

    /// Meta-data files collapsed into an earlier one with the same tag.
    pub duplicate_meta_files: usize,

    /// Wall-clock time from start to completion.
    pub duration: Duration,
}
