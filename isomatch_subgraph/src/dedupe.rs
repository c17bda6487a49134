use std::collections::HashSet;

use crate::config::DedupeMode;
use crate::index::NodeId;
use crate::mapping::NodeMapping;

/// Remembers which embeddings have been emitted under a [`DedupeMode`].
#[derive(Debug, Default)]
pub(crate) struct Deduper {
    mode: DedupeMode,
    seen: HashSet<Vec<NodeId>>,
}

impl Deduper {
    pub(crate) fn new(mode: DedupeMode) -> Self {
        Deduper {
            mode,
            seen: HashSet::new(),
        }
    }

    /// Whether `mapping` is new. Records it as seen when it is.
    pub(crate) fn admit(&mut self, mapping: &NodeMapping) -> bool {
        match self.mode {
            DedupeMode::None => true,
            DedupeMode::ImageSet => self.seen.insert(mapping.signature()),
        }
    }
}
