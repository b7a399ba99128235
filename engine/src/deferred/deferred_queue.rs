use std::collections::{HashMap, HashSet};

use scene_sorter_shared::{DeferredHandle, EntityId};

/// One pending re-evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredTask {
    pub entity: EntityId,
    /// 1 for the first deferred evaluation.
    pub attempt: u8,
    /// Queued by a manual full sort rather than a change notification.
    pub manual: bool,
}

/// Pending re-evaluations keyed by the handle given to the host scheduler.
///
/// The queue holds plain data; the engine resolves a handle back into a task
/// when the timer fires. The same entity may be queued any number of times.
pub struct DeferredQueue {
    next_handle: u32,
    tasks: HashMap<DeferredHandle, DeferredTask>,
    entity_to_handles: HashMap<EntityId, HashSet<DeferredHandle>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            tasks: HashMap::new(),
            entity_to_handles: HashMap::new(),
        }
    }

    pub fn queue(&mut self, task: DeferredTask) -> DeferredHandle {
        let handle = self.generate_handle();

        self.entity_to_handles
            .entry(task.entity)
            .or_default()
            .insert(handle);
        self.tasks.insert(handle, task);

        handle
    }

    /// Removes and returns the task; `None` if unknown or already taken.
    pub fn take(&mut self, handle: &DeferredHandle) -> Option<DeferredTask> {
        let task = self.tasks.remove(handle)?;

        let mut remove = false;
        if let Some(handles) = self.entity_to_handles.get_mut(&task.entity) {
            handles.remove(handle);
            remove = handles.is_empty();
        }
        if remove {
            self.entity_to_handles.remove(&task.entity);
        }

        Some(task)
    }

    pub fn pending_for(&self, entity: &EntityId) -> usize {
        self.entity_to_handles
            .get(entity)
            .map_or(0, |handles| handles.len())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Handles issued before a clear resolve to nothing afterwards.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.entity_to_handles.clear();
    }

    fn generate_handle(&mut self) -> DeferredHandle {
        loop {
            let handle = DeferredHandle::new(self.next_handle);
            self.next_handle = self.next_handle.wrapping_add(1);
            if !self.tasks.contains_key(&handle) {
                return handle;
            }
        }
    }
}

impl Default for DeferredQueue {
    fn default() -> Self {
        Self::new()
    }
}
