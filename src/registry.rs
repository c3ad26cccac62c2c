use std::collections::hash_map::{Entry as MapEntry, HashMap};
use std::path::PathBuf;

use crate::classify::HashTag;
use crate::results::Pod;

pub(crate) struct MetaFileEntry {
    pub tag:  HashTag,
    pub path: PathBuf,
}

pub(crate) struct CounterFileEntry {
    pub tag:      HashTag,
    pub pid:      u64,
    pub sequence: u64,
    pub path:     PathBuf,
    pub origin:   usize,
}

/// Output of [`PodRegistry::finalize`].
pub(crate) struct Finalized {
    pub pods:    Vec<Pod>,
    pub orphans: Vec<CounterFileEntry>,
}

/// Accumulates classified entries in scan order.
///
/// Meta files claim a slot the first time their tag is seen. Counter files
/// are held per tag whether or not a slot exists yet, so a counter that
/// precedes its meta file (a later origin) is resolved at finalize time.
#[derive(Default)]
pub(crate) struct PodRegistry {
    slots:         HashMap<HashTag, usize>,
    metas:         Vec<MetaFileEntry>,
    pending:       HashMap<HashTag, Vec<CounterFileEntry>>,
    pending_order: Vec<HashTag>,
}

impl PodRegistry {
    /// Returns `false` when the tag already has a slot; the earlier path stays.
    pub fn observe_meta(&mut self, meta: MetaFileEntry) -> bool {
        match self.slots.entry(meta.tag) {
            MapEntry::Occupied(_) => false,
            MapEntry::Vacant(v) => {
                v.insert(self.metas.len());
                self.metas.push(meta);
                true
            }
        }
    }

    pub fn observe_counter(&mut self, counter: CounterFileEntry) {
        tracing::trace!(
            tag = %counter.tag,
            pid = counter.pid,
            sequence = counter.sequence,
            origin = counter.origin,
            "counter file"
        );

        match self.pending.entry(counter.tag) {
            MapEntry::Occupied(mut o) => o.get_mut().push(counter),
            MapEntry::Vacant(v) => {
                self.pending_order.push(counter.tag);
                v.insert(vec![counter]);
            }
        }
    }

    /// Resolve pending counters against slots.
    ///
    /// Pods come out in slot order. Counters with no slot are returned as
    /// orphans, grouped by tag in first-observed order.
    pub fn finalize(self, track_origins: bool) -> Finalized {
        let Self { metas, mut pending, pending_order, .. } = self;

        let pods = metas
            .into_iter()
            .map(|meta| {
                let counters = pending.remove(&meta.tag).unwrap_or_default();
                let origins = track_origins.then(|| counters.iter().map(|c| c.origin).collect());
                Pod {
                    meta_file: meta.path,
                    counter_data_files: counters.into_iter().map(|c| c.path).collect(),
                    origins,
                }
            })
            .collect();

        let orphans = pending_order
            .into_iter()
            .filter_map(|tag| pending.remove(&tag))
            .flatten()
            .collect();

        Finalized { pods, orphans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(n: u8) -> HashTag {
        HashTag::new([n; 16])
    }

    fn meta(n: u8, path: &str) -> MetaFileEntry {
        MetaFileEntry { tag: tag(n), path: path.into() }
    }

    fn counter(n: u8, path: &str, origin: usize) -> CounterFileEntry {
        CounterFileEntry { tag: tag(n), pid: 42, sequence: 1, path: path.into(), origin }
    }

    #[test]
    fn first_meta_wins() {
        let mut reg = PodRegistry::default();
        assert!(reg.observe_meta(meta(1, "a/meta")));
        assert!(!reg.observe_meta(meta(1, "b/meta")));

        let out = reg.finalize(false);
        assert_eq!(out.pods.len(), 1);
        assert_eq!(out.pods[0].meta_file, PathBuf::from("a/meta"));
    }

    #[test]
    fn counter_before_meta_is_kept() {
        let mut reg = PodRegistry::default();
        reg.observe_counter(counter(7, "a/c1", 0));
        reg.observe_meta(meta(7, "b/meta"));
        reg.observe_counter(counter(7, "b/c2", 1));

        let out = reg.finalize(true);
        assert_eq!(out.pods[0].counter_data_files, vec![PathBuf::from("a/c1"), PathBuf::from("b/c2")]);
        assert_eq!(out.pods[0].origins, Some(vec![0, 1]));
        assert!(out.orphans.is_empty());
    }

    #[test]
    fn pods_follow_slot_order_not_tag_order() {
        let mut reg = PodRegistry::default();
        reg.observe_meta(meta(9, "m9"));
        reg.observe_meta(meta(1, "m1"));
        reg.observe_meta(meta(5, "m5"));

        let out = reg.finalize(false);
        let metas: Vec<_> = out.pods.iter().map(|p| p.meta_file.clone()).collect();
        assert_eq!(metas, vec![PathBuf::from("m9"), PathBuf::from("m1"), PathBuf::from("m5")]);
    }

    #[test]
    fn meta_without_counters_is_empty_pod() {
        let mut reg = PodRegistry::default();
        reg.observe_meta(meta(3, "m3"));

        let out = reg.finalize(true);
        assert!(out.pods[0].counter_data_files.is_empty());
        assert_eq!(out.pods[0].origins, Some(vec![]));
    }

    #[test]
    fn orphans_in_first_observed_order() {
        let mut reg = PodRegistry::default();
        reg.observe_counter(counter(4, "o4a", 0));
        reg.observe_counter(counter(2, "o2", 0));
        reg.observe_counter(counter(4, "o4b", 1));
        reg.observe_meta(meta(8, "m8"));

        let out = reg.finalize(false);
        assert_eq!(out.pods.len(), 1);
        assert_eq!(out.pods[0].origins, None);
        let orphans: Vec<_> = out.orphans.iter().map(|c| c.path.clone()).collect();
        assert_eq!(orphans, vec![PathBuf::from("o4a"), PathBuf::from("o4b"), PathBuf::from("o2")]);
    }
}
