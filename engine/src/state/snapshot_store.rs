use std::collections::HashSet;

use scene_sorter_shared::EntityId;

/// Entity ids that appeared or disappeared since the last advanced baseline.
/// Both lists are sorted so rounds process entities in a stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diff {
    pub added: Vec<EntityId>,
    pub removed: Vec<EntityId>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Last-seen set of entity ids.
///
/// An unprimed store has no meaningful baseline yet; the first successful
/// observation is adopted instead of diffed, so nothing looks "new" just
/// because the store was empty.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    last_seen: HashSet<EntityId>,
    primed: bool,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn last_seen(&self) -> &HashSet<EntityId> {
        &self.last_seen
    }

    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }

    pub fn diff(&self, current: &HashSet<EntityId>) -> Diff {
        let mut added: Vec<EntityId> = current.difference(&self.last_seen).copied().collect();
        let mut removed: Vec<EntityId> = self.last_seen.difference(current).copied().collect();
        added.sort();
        removed.sort();
        Diff { added, removed }
    }

    /// Moves the baseline forward after a processed round.
    pub fn advance(&mut self, current: HashSet<EntityId>) {
        self.last_seen = current;
        self.primed = true;
    }

    /// Replaces the baseline wholesale, e.g. when resuming.
    pub fn reset_to(&mut self, current: HashSet<EntityId>) {
        self.advance(current);
    }

    /// Drops one entity from the baseline so the next diff reports it as
    /// added again.
    pub fn forget(&mut self, entity: &EntityId) {
        self.last_seen.remove(entity);
    }

    /// Forgets the baseline; the next observation primes it again.
    pub fn clear(&mut self) {
        self.last_seen.clear();
        self.primed = false;
    }
}
