use std::collections::HashSet;

use log::{info, warn};

use scene_sorter_shared::{ContainerInfo, ContainerKey, SceneMut};

use crate::SorterError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    pub deleted: Vec<(ContainerKey, String)>,
    pub errors: Vec<SorterError>,
}

/// Deletes empty engine-owned containers. The owner flag is the gate: a
/// user container is never deleted, whatever its name or contents.
pub struct ReclamationSweeper {
    protected_names: HashSet<String>,
}

impl ReclamationSweeper {
    pub fn new(protected_names: &[String]) -> Self {
        Self {
            protected_names: protected_names.iter().cloned().collect(),
        }
    }

    pub fn is_reclaimable(&self, info: &ContainerInfo, root: &ContainerKey) -> bool {
        info.key != *root
            && info.is_engine_owned()
            && info.is_empty()
            && !self.protected_names.contains(&info.name)
    }

    /// Repeats until nothing more can be reclaimed, so a parent emptied by
    /// deleting its last child goes in the same sweep.
    pub fn sweep<H: SceneMut + ?Sized>(&self, host: &mut H, root: &ContainerKey) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        let mut failed: HashSet<ContainerKey> = HashSet::new();

        loop {
            let candidates: Vec<ContainerInfo> = host
                .containers()
                .iter()
                .filter(|key| !failed.contains(key))
                .filter_map(|key| host.container(key))
                .filter(|info| self.is_reclaimable(info, root))
                .collect();

            if candidates.is_empty() {
                break;
            }

            for info in candidates {
                match host.delete_container(&info.key) {
                    Ok(()) => {
                        info!("Sorter: reclaimed empty container {} ({})", info.name, info.key);
                        outcome.deleted.push((info.key, info.name));
                    }
                    Err(source) => {
                        warn!("Sorter: cannot reclaim container {} ({}): {}", info.name, info.key, source);
                        failed.insert(info.key);
                        outcome.errors.push(SorterError::Sweep {
                            container: info.name,
                            source,
                        });
                    }
                }
            }
        }

        outcome
    }
}
