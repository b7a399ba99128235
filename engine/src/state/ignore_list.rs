use std::collections::HashSet;

use scene_sorter_shared::EntityId;

/// Entity ids exempt from automatic reclassification.
///
/// Filled with every entity present when the sorter is disabled. An id leaves
/// the list when it disappears from the scene or the first time it shows up
/// in a genuine diff again.
#[derive(Clone, Debug, Default)]
pub struct IgnoreList {
    inner: HashSet<EntityId>,
}

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(&mut self, entities: HashSet<EntityId>) {
        self.inner = entities;
    }

    pub fn contains(&self, entity: &EntityId) -> bool {
        self.inner.contains(entity)
    }

    /// Returns true if the entity was being ignored until now.
    pub fn release(&mut self, entity: &EntityId) -> bool {
        self.inner.remove(entity)
    }

    pub fn prune(&mut self, removed: &[EntityId]) {
        for entity in removed {
            self.inner.remove(entity);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
