use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::ControlFlow;
use std::time::Duration;

use crate::dedupe::Deduper;
use crate::mapping::NodeMapping;

/// One match: every pattern key paired with the target key it maps to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Embedding<K: Ord> {
    map: BTreeMap<K, K>,
}

impl<K: Ord> Embedding<K> {
    /// The target key `pattern` maps to.
    pub fn get(&self, pattern: &K) -> Option<&K> {
        self.map.get(pattern)
    }

    /// `(pattern, target)` pairs ordered by pattern key.
    pub fn iter(&self) -> btree_map::Iter<'_, K, K> {
        self.map.iter()
    }

    /// Number of mapped pattern vertices.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no vertex is mapped (the empty pattern's embedding).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Target keys covered by this embedding, ascending.
    pub fn image(&self) -> Vec<&K> {
        let mut image: Vec<&K> = self.map.values().collect();
        image.sort_unstable();
        image
    }
}

impl<K: Ord + Clone> Embedding<K> {
    /// The same pairs with pattern and target swapped.
    pub fn inverse(&self) -> Embedding<K> {
        self.map
            .iter()
            .map(|(p, t)| (t.clone(), p.clone()))
            .collect()
    }
}

impl<K: Ord> FromIterator<(K, K)> for Embedding<K> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        Embedding {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord> From<BTreeMap<K, K>> for Embedding<K> {
    fn from(map: BTreeMap<K, K>) -> Self {
        Embedding { map }
    }
}

impl<K: Ord> IntoIterator for Embedding<K> {
    type Item = (K, K);
    type IntoIter = btree_map::IntoIter<K, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K: Ord> IntoIterator for &'a Embedding<K> {
    type Item = (&'a K, &'a K);
    type IntoIter = btree_map::Iter<'a, K, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// Counters describing how much work a search did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive search frames entered.
    pub frames: u64,
    /// Candidate target vertices considered across all frames.
    pub candidates_scanned: u64,
    /// Candidates rejected by adjacency or propagation.
    pub pruned: u64,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

/// A precondition that made the search unnecessary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortCircuit<K> {
    /// Node counts rule out any match.
    NodeCount {
        /// Pattern node count.
        pattern: usize,
        /// Target node count.
        target: usize,
    },
    /// Edge counts rule out any match.
    EdgeCount {
        /// Pattern edge count.
        pattern: usize,
        /// Target edge count.
        target: usize,
    },
    /// This pattern vertex has no label- and degree-compatible target vertex.
    EmptyCandidates {
        /// The pattern vertex.
        vertex: K,
    },
}

/// Everything a search produced.
#[derive(Clone, Debug)]
pub struct Embeddings<K: Ord> {
    /// Embeddings in discovery order.
    pub items: Vec<Embedding<K>>,
    /// Work counters. All zero when the search was short-circuited.
    pub stats: SearchStats,
    /// Set when a precondition ruled out every match before searching.
    pub short_circuit: Option<ShortCircuit<K>>,
}

impl<K: Ord> Embeddings<K> {
    pub(crate) fn short_circuited(reason: ShortCircuit<K>) -> Self {
        Embeddings {
            items: Vec::new(),
            stats: SearchStats::default(),
            short_circuit: Some(reason),
        }
    }

    /// Number of embeddings found.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Embeddings in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Embedding<K>> {
        self.items.iter()
    }

    /// Whether the search was skipped because of a precondition.
    pub fn is_short_circuited(&self) -> bool {
        self.short_circuit.is_some()
    }

    /// Drop the statistics and keep only the embeddings.
    pub fn into_mappings(self) -> Vec<Embedding<K>> {
        self.items
    }
}

impl<'a, K: Ord> IntoIterator for &'a Embeddings<K> {
    type Item = &'a Embedding<K>;
    type IntoIter = std::slice::Iter<'a, Embedding<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Accumulates complete mappings, applying dedupe and the result limit.
#[derive(Debug)]
pub(crate) struct Collector<K: Ord> {
    items: Vec<Embedding<K>>,
    dedupe: Deduper,
    limit: Option<usize>,
}

impl<K: Ord + Clone> Collector<K> {
    pub(crate) fn new(dedupe: Deduper, limit: Option<usize>) -> Self {
        Collector {
            items: Vec::new(),
            dedupe,
            limit,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Record a complete mapping, translated back to keys.
    ///
    /// Breaks once the configured limit is reached.
    pub(crate) fn emit(
        &mut self,
        mapping: &NodeMapping,
        pattern_key: impl Fn(usize) -> K,
        target_key: impl Fn(usize) -> K,
    ) -> ControlFlow<()> {
        if self.limit_reached() {
            return ControlFlow::Break(());
        }

        if self.dedupe.admit(mapping) {
            self.items.push(
                mapping
                    .pairs()
                    .map(|(p, t)| (pattern_key(p), target_key(t)))
                    .collect(),
            );
        }

        if self.limit_reached() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.items.len() >= limit)
    }

    pub(crate) fn into_items(self) -> Vec<Embedding<K>> {
        self.items
    }
}
