use log::debug;

use scene_sorter_shared::{ContainerKey, EntityId, HostError, SceneMut};

use crate::SorterError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Entity was already solely a member of the target.
    Unchanged,
    /// Entity now belongs to the target only; `from` is its prior membership.
    Moved { from: Vec<ContainerKey> },
}

/// Makes `target` the entity's only container.
///
/// The target link is made before any other link is removed, so a failing
/// host call can leave a stale extra membership but never an orphaned
/// entity.
pub fn place<H: SceneMut + ?Sized>(
    host: &mut H,
    entity: &EntityId,
    target: &ContainerKey,
) -> Result<PlacementOutcome, SorterError> {
    let current = host.containers_of(entity);

    if current.len() == 1 && current[0] == *target {
        return Ok(PlacementOutcome::Unchanged);
    }

    let placement_error = |container: &ContainerKey, source: HostError| SorterError::Placement {
        entity_id: entity.to_string(),
        container: container.to_string(),
        source,
    };

    if !current.contains(target) {
        host.link_entity(target, entity)
            .map_err(|source| placement_error(target, source))?;
    }

    for container in current.iter().filter(|container| *container != target) {
        host.unlink_entity(container, entity)
            .map_err(|source| placement_error(container, source))?;
    }

    debug!("Sorter: moved {} from {:?} to {}", entity, current, target);

    Ok(PlacementOutcome::Moved { from: current })
}
