use super::filter::CommonWords;
use super::node::{NodeGraph, NodeId};
use super::random::RandomSource;
use std::collections::{BTreeSet, HashMap};

/// Number of slots in the entry cache
pub const CACHE_SLOTS: usize = 1000;

/// Fixed table of nodes used as starting points for dreams.
///
/// Slots are only ever overwritten, never cleared. All writes go through
/// [`EntryCache::insert`], which refuses a node whose word is already held
/// by any slot.
pub struct EntryCache {
    slots: Box<[Option<NodeId>; CACHE_SLOTS]>,
    word_index: HashMap<String, BTreeSet<usize>>,  // Word -> slots mapping
}

impl EntryCache {
    pub fn new() -> Self {
        Self {
            slots: Box::new([None; CACHE_SLOTS]),
            word_index: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        CACHE_SLOTS
    }

    /// Node held by `slot`, if any
    pub fn get(&self, slot: usize) -> Option<NodeId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, node)| node.map(|id| (slot, id)))
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if any slot holds a node carrying `word`
    pub fn is_cached(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Cached nodes carrying `word`, in slot order
    pub fn nodes_with_word<'a>(&'a self, word: &str) -> impl Iterator<Item = NodeId> + 'a {
        self.word_index
            .get(word)
            .into_iter()
            .flat_map(|slots| slots.iter())
            .filter_map(move |&slot| self.slots[slot])
    }

    /// Writes `node` into `slot` unless its word is already cached.
    ///
    /// Returns whether the slot was overwritten. Out-of-range slots are
    /// rejected.
    pub fn insert(&mut self, slot: usize, node: NodeId, graph: &NodeGraph) -> bool {
        if slot >= CACHE_SLOTS {
            return false;
        }
        let word = graph.word(node);
        if self.is_cached(word) {
            return false;
        }

        if let Some(old) = self.slots[slot] {
            let old_word = graph.word(old);
            if let Some(slots) = self.word_index.get_mut(old_word) {
                slots.remove(&slot);
                if slots.is_empty() {
                    self.word_index.remove(old_word);
                }
            }
        }

        self.slots[slot] = Some(node);
        self.word_index
            .entry(word.to_owned())
            .or_default()
            .insert(slot);
        true
    }

    /// One line per slot: the cached word, or `nil` when empty
    pub fn describe(&self, graph: &NodeGraph) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(id) => graph.word(*id).to_owned(),
                None => "nil".to_owned(),
            })
            .collect()
    }

    /// Returns cache statistics
    pub fn stats(&self, graph: &NodeGraph) -> CacheStats {
        CacheStats {
            occupied: self.occupied(),
            distinct_words: self.word_index.len(),
            related_links: self.iter().map(|(_, id)| graph.related(id).len()).sum(),
        }
    }
}

impl Default for EntryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub occupied: usize,
    pub distinct_words: usize,
    pub related_links: usize,
}

/// Offers the non-common nodes of a fresh chain to the cache.
///
/// Draws `k` in `[0, important)` and makes `k` attempts, each picking a
/// random slot and a random important node. Attempts whose word is already
/// cached are skipped, not retried. A chain with a single important node
/// therefore never inserts anything. Returns the number of slots written.
pub fn cache_nodes<R: RandomSource + ?Sized>(
    cache: &mut EntryCache,
    graph: &NodeGraph,
    head: NodeId,
    common_words: &CommonWords,
    rng: &mut R,
) -> usize {
    let important: Vec<NodeId> = graph
        .chain(head)
        .filter(|&id| !common_words.contains(graph.word(id)))
        .collect();

    if important.is_empty() {
        return 0;
    }

    let attempts = rng.below(important.len());
    let mut written = 0;
    for _ in 0..attempts {
        let slot = rng.below(CACHE_SLOTS);
        let candidate = important[rng.below(important.len())];
        if cache.insert(slot, candidate, graph) {
            written += 1;
        }
    }
    written
}
