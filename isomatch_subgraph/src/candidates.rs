use std::hash::Hash;

use isomatch_graph::Labeled;

use crate::config::MatchMode;
use crate::index::{Index, NodeId};

const WORD_BITS: usize = u64::BITS as usize;

/// A set of target node ids, one bit per target node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CandidateSet {
    words: Vec<u64>,
}

impl CandidateSet {
    pub(crate) fn empty(universe: usize) -> Self {
        CandidateSet {
            words: vec![0; universe.div_ceil(WORD_BITS)],
        }
    }

    pub(crate) fn from_ids(universe: usize, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut set = Self::empty(universe);
        for id in ids {
            set.insert(id);
        }
        set
    }

    pub(crate) fn insert(&mut self, id: NodeId) {
        self.words[id / WORD_BITS] |= 1u64 << (id % WORD_BITS);
    }

    pub(crate) fn remove(&mut self, id: NodeId) {
        self.words[id / WORD_BITS] &= !(1u64 << (id % WORD_BITS));
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.words
            .get(id / WORD_BITS)
            .is_some_and(|&word| word & (1u64 << (id % WORD_BITS)) != 0)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Shrink to `{id}` if `id` is a member, otherwise to the empty set.
    pub(crate) fn keep_only(&mut self, id: NodeId) {
        let present = self.contains(id);
        self.words.fill(0);
        if present {
            self.insert(id);
        }
    }

    pub(crate) fn intersect_with(&mut self, other: &CandidateSet) {
        for (word, mask) in self.words.iter_mut().zip(&other.words) {
            *word &= mask;
        }
    }

    /// Members in ascending id order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(i, &word)| Bits {
                word,
                base: i * WORD_BITS,
            })
    }
}

struct Bits {
    word: u64,
    base: usize,
}

impl Iterator for Bits {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(self.base + bit)
    }
}

/// Pattern vertex -> admissible target vertices.
///
/// Built once per search from label and degree compatibility. The propagating
/// strategy clones the table at every branch and narrows the clone, so a
/// table never shrinks underneath a sibling branch.
#[derive(Clone, Debug)]
pub(crate) struct CandidateTable {
    sets: Vec<CandidateSet>,
}

impl CandidateTable {
    pub(crate) fn build<K, D>(
        pattern: &Index<'_, K, D>,
        target: &Index<'_, K, D>,
        mode: MatchMode,
    ) -> Self
    where
        K: Clone + Eq + Hash,
        D: Labeled,
    {
        let sets = pattern
            .ids()
            .map(|v| {
                CandidateSet::from_ids(
                    target.len(),
                    target.ids().filter(|&w| {
                        pattern.same_label(v, target, w)
                            && mode.admits_degree(pattern.degree(v), target.degree(w))
                    }),
                )
            })
            .collect();

        CandidateTable { sets }
    }

    pub(crate) fn get(&self, v: NodeId) -> &CandidateSet {
        &self.sets[v]
    }

    /// The first pattern vertex with no candidates left.
    pub(crate) fn first_empty(&self) -> Option<NodeId> {
        self.sets.iter().position(CandidateSet::is_empty)
    }

    /// Narrow the table as if `v -> w` had been fixed.
    ///
    /// `w` leaves every other vertex's set, `v`'s set becomes `{w}`, and every
    /// pattern neighbor of `v` keeps only target neighbors of `w`. Returns
    /// `false` when the degree gate fails or any set runs empty.
    pub(crate) fn refine<K, D>(
        &mut self,
        pattern: &Index<'_, K, D>,
        target: &Index<'_, K, D>,
        mode: MatchMode,
        v: NodeId,
        w: NodeId,
    ) -> bool
    where
        K: Clone + Eq + Hash,
    {
        if !mode.admits_degree(pattern.degree(v), target.degree(w)) {
            return false;
        }

        for (x, set) in self.sets.iter_mut().enumerate() {
            if x == v {
                set.keep_only(w);
            } else {
                set.remove(w);
            }
        }

        let reachable = CandidateSet::from_ids(target.len(), target.neighbors(w).iter().copied());
        for &x in pattern.neighbors(v) {
            self.sets[x].intersect_with(&reachable);
        }

        self.first_empty().is_none()
    }
}
