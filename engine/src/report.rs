use scene_sorter_shared::{Category, ContainerKey, DeferredHandle, EntityId};

use crate::SorterError;

/// What started a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Notification,
    Deferred,
    ClassifyAll,
    Enable,
    Disable,
    DocumentLoaded,
}

/// Why a round did no work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    Disabled,
    HostUnavailable,
    /// Too many new entities at once; the baseline stays where it was.
    Storm { added: usize, threshold: usize },
    /// First successful observation after enabling; adopted as baseline.
    BaselinePrimed,
    /// Deferred handle unknown, already consumed, or its entity is exempt.
    NothingDeferred,
}

/// One real membership change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementRecord {
    pub entity: EntityId,
    pub category: Category,
    pub from: Vec<ContainerKey>,
    pub to: ContainerKey,
}

/// Summary of one round, returned by every entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub trigger: Trigger,
    pub skipped: Option<SkipReason>,
    pub placements: Vec<PlacementRecord>,
    pub containers_created: Vec<ContainerKey>,
    pub containers_deleted: Vec<(ContainerKey, String)>,
    pub reordered: bool,
    pub deferred: Vec<(EntityId, DeferredHandle)>,
    pub errors: Vec<SorterError>,
}

impl RoundReport {
    pub(crate) fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            skipped: None,
            placements: Vec::new(),
            containers_created: Vec::new(),
            containers_deleted: Vec::new(),
            reordered: false,
            deferred: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn skip(trigger: Trigger, reason: SkipReason) -> Self {
        let mut report = Self::new(trigger);
        report.skipped = Some(reason);
        report
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// True if the round changed nothing in the scene.
    pub fn is_noop(&self) -> bool {
        self.placements.is_empty()
            && self.containers_created.is_empty()
            && self.containers_deleted.is_empty()
            && !self.reordered
    }

    pub fn placed(&self, entity: &EntityId) -> Option<&PlacementRecord> {
        self.placements.iter().find(|record| record.entity == *entity)
    }
}
