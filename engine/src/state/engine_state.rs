use std::collections::HashSet;

use log::info;

use scene_sorter_shared::EntityId;

use super::{IgnoreList, SnapshotStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuspendState {
    Enabled,
    Disabled,
}

/// Session-scoped sorter state: the suspend machine plus the baseline and
/// ignore-list it governs.
///
/// Starts (and resets to) `Disabled` with no baseline.
#[derive(Clone, Debug)]
pub struct EngineState {
    suspend: SuspendState,
    snapshot: SnapshotStore,
    ignore_list: IgnoreList,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            suspend: SuspendState::Disabled,
            snapshot: SnapshotStore::new(),
            ignore_list: IgnoreList::new(),
        }
    }

    pub fn suspend_state(&self) -> SuspendState {
        self.suspend
    }

    pub fn is_enabled(&self) -> bool {
        self.suspend == SuspendState::Enabled
    }

    pub fn snapshot(&self) -> &SnapshotStore {
        &self.snapshot
    }

    pub fn snapshot_mut(&mut self) -> &mut SnapshotStore {
        &mut self.snapshot
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore_list
    }

    pub fn ignore_list_mut(&mut self) -> &mut IgnoreList {
        &mut self.ignore_list
    }

    /// Enabled -> Disabled. `present` is every entity in the scene right now;
    /// `None` when the host could not say, in which case the last baseline
    /// stands in for it.
    pub fn suspend(&mut self, present: Option<HashSet<EntityId>>) -> bool {
        if self.suspend == SuspendState::Disabled {
            return false;
        }

        let present = present.unwrap_or_else(|| self.snapshot.last_seen().clone());
        info!("Sorter suspended, ignoring {} existing entities", present.len());
        self.ignore_list.populate(present);
        self.suspend = SuspendState::Disabled;
        true
    }

    /// Disabled -> Enabled. The baseline becomes `present`, so the next diff
    /// only contains entities created after this call. With `None` the
    /// baseline is primed by the next successful observation instead.
    pub fn resume(&mut self, present: Option<HashSet<EntityId>>) -> bool {
        if self.suspend == SuspendState::Enabled {
            return false;
        }

        match present {
            Some(present) => {
                info!("Sorter resumed with a baseline of {} entities", present.len());
                self.snapshot.reset_to(present);
            }
            None => {
                info!("Sorter resumed, baseline deferred until the host is available");
                self.snapshot.clear();
            }
        }
        self.suspend = SuspendState::Enabled;
        true
    }

    /// Back to the safe default, used when the host loads a document.
    pub fn reset(&mut self) {
        self.suspend = SuspendState::Disabled;
        self.snapshot.clear();
        self.ignore_list.clear();
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
