use log::{debug, info, warn};

use scene_sorter_shared::{ContainerKey, SceneMut};

use crate::SorterError;

/// Re-links the canonical containers as the leading children of `root`, in
/// the order given. Only canonical containers that are direct children of
/// the root move; every other child keeps its relative order behind them.
/// A canonical container that is linked under no parent at all is put back
/// under the root first.
///
/// Returns whether anything was re-linked.
pub fn enforce<H: SceneMut + ?Sized>(
    host: &mut H,
    root: &ContainerKey,
    canonical: &[ContainerKey],
) -> Result<bool, SorterError> {
    let reattached = reattach_detached(host, root, canonical)?;

    let children = host.children(root);
    let leading: Vec<ContainerKey> = canonical
        .iter()
        .filter(|key| children.contains(key))
        .copied()
        .collect();

    if children.starts_with(&leading) {
        return Ok(reattached);
    }

    for (index, key) in leading.iter().enumerate() {
        let reorder_error = |source| SorterError::Reorder {
            container: key.to_string(),
            source,
        };

        host.unlink_child(root, key).map_err(reorder_error)?;
        if let Err(source) = host.link_child_at(root, key, index) {
            if let Err(fallback) = host.link_child(root, key) {
                warn!(
                    "Sorter: {} is detached from {} until the next round: {}",
                    key, root, fallback
                );
            }
            return Err(reorder_error(source));
        }
    }

    debug!("Sorter: re-linked {} canonical containers under {}", leading.len(), root);

    Ok(true)
}

fn reattach_detached<H: SceneMut + ?Sized>(
    host: &mut H,
    root: &ContainerKey,
    canonical: &[ContainerKey],
) -> Result<bool, SorterError> {
    let containers = host.containers();
    let mut reattached = false;

    for key in canonical {
        if key == root || host.container(key).is_none() {
            continue;
        }
        if containers
            .iter()
            .any(|parent| host.children(parent).contains(key))
        {
            continue;
        }

        host.link_child(root, key)
            .map_err(|source| SorterError::Reorder {
                container: key.to_string(),
                source,
            })?;
        info!("Sorter: re-attached detached container {} under {}", key, root);
        reattached = true;
    }

    Ok(reattached)
}
