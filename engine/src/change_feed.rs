use std::collections::HashSet;

use log::warn;

use scene_sorter_shared::{EntityId, HostError, SceneRef};

/// Reads the full current entity-id set from the host.
///
/// Returns `None` (and logs) when the host context is transiently
/// unavailable; the caller skips the round rather than diffing against an
/// empty set.
pub(crate) fn current_entity_ids<H: SceneRef + ?Sized>(
    host: &H,
    operation: &'static str,
) -> Option<HashSet<EntityId>> {
    match host.entity_ids() {
        Ok(ids) => Some(ids),
        Err(HostError::Unavailable) => {
            warn!("Sorter: host unavailable during {}, skipping", operation);
            None
        }
        Err(error) => {
            warn!("Sorter: cannot enumerate entities during {}: {}", operation, error);
            None
        }
    }
}
