use thiserror::Error;

use scene_sorter_shared::HostError;

/// Failures the sorter absorbs while processing a round.
///
/// None of these ever escape an entry point: they are logged and collected
/// into the round's [`crate::RoundReport`]. An entity that no rule matches is
/// not an error at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SorterError {
    /// No active document or context; the round is skipped
    #[error("Host unavailable during {operation}")]
    HostUnavailable { operation: &'static str },

    /// A user-created container occupies a canonical name. Entities are still
    /// placed into it, but it is never reclaimed.
    #[error("Container {container} is user-owned but uses the canonical name {name}")]
    ContainerNameConflict { container: String, name: String },

    /// Deferred evaluation found its entity gone
    #[error("Entity {entity_id} no longer exists for deferred evaluation")]
    SchedulerEntityGone { entity_id: String },

    /// Moving an entity failed part way
    #[error("Failed to place entity {entity_id} into {container}: {source}")]
    Placement {
        entity_id: String,
        container: String,
        source: HostError,
    },

    /// Looking up or creating a managed container failed
    #[error("Failed to ensure container {container}: {source}")]
    Registry { container: String, source: HostError },

    /// Re-linking canonical containers under the root failed
    #[error("Failed to reorder container {container}: {source}")]
    Reorder { container: String, source: HostError },

    /// Deleting an empty engine-owned container failed
    #[error("Failed to reclaim container {container}: {source}")]
    Sweep { container: String, source: HostError },
}

impl SorterError {
    /// Transient failures that heal on their own with the next notification.
    pub fn is_transient(&self) -> bool {
        match self {
            SorterError::HostUnavailable { .. } => true,
            SorterError::Placement { source, .. }
            | SorterError::Registry { source, .. }
            | SorterError::Reorder { source, .. }
            | SorterError::Sweep { source, .. } => *source == HostError::Unavailable,
            _ => false,
        }
    }
}
