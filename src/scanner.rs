use std::io;
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};

use crate::entry::{Entry, EntryKind};
use crate::error::PodError;
use crate::traits::Lister;

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// One caller-supplied input directory and its position in the input list.
///
/// `index` is what callers see in [`Pod::origins`](crate::Pod::origins); it
/// is assigned once from the input order and never recomputed.
pub(crate) struct Origin<'a> {
    pub index: usize,
    pub path:  &'a Path,
}

// ---------------------------------------------------------------------------
// FsLister
// ---------------------------------------------------------------------------

/// Lists a directory on the local filesystem, one level deep.
///
/// Backed by `ignore`'s walker with every filter switched off, so hidden
/// files and `.gitignore`d files are listed like any other entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl Lister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, PodError> {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .max_depth(Some(1));

        let mut entries = Vec::new();

        for res in builder.build() {
            let dent = res.map_err(|e| map_ignore_error(dir, e))?;

            // The walker yields a plain file as its own root instead of failing.
            if dent.depth() == 0 {
                if !dent.path().is_dir() {
                    return Err(PodError::unreadable(dir, io::Error::other("not a directory")));
                }
                continue;
            }

            entries.push(to_entry(dent));
        }

        Ok(entries)
    }
}

fn to_entry(dent: DirEntry) -> Entry {
    let kind = match dent.file_type() {
        Some(ft) if ft.is_dir()     => EntryKind::Dir,
        Some(ft) if ft.is_file()    => EntryKind::File,
        Some(ft) if ft.is_symlink() => EntryKind::Symlink,
        _                           => EntryKind::Other,
    };

    let name = dent.file_name().to_string_lossy().into_owned();

    Entry {
        path: dent.into_path(),
        name,
        kind,
    }
}

fn map_ignore_error(dir: &Path, e: ignore::Error) -> PodError {
    let message = e.to_string();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    PodError::unreadable(dir, source)
}

// ---------------------------------------------------------------------------
// scan_origin()
// ---------------------------------------------------------------------------

/// List one origin and return its non-directory entries in byte-wise
/// ascending name order.
///
/// The sort is part of the contract: it fixes counter-file order within an
/// origin no matter what order the lister produced.
pub(crate) fn scan_origin(lister: &dyn Lister, origin: &Origin<'_>) -> Result<Vec<Entry>, PodError> {
    let mut entries = lister.list(origin.path)?;
    entries.retain(|e| e.kind != EntryKind::Dir);
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    tracing::debug!(
        origin = origin.index,
        path = %origin.path.display(),
        entries = entries.len(),
        "scanned origin"
    );

    Ok(entries)
}
