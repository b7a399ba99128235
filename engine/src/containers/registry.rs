use std::collections::{HashMap, HashSet};

use log::{info, warn};

use scene_sorter_shared::{Category, ContainerKey, HostError, Owner, SceneMut, SceneRef};

use crate::SorterError;

/// A container the registry found or created for a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnsuredContainer {
    pub key: ContainerKey,
    pub created: bool,
    /// Set the first time a user-owned container is found squatting on a
    /// canonical name.
    pub conflict: Option<SorterError>,
}

/// Category -> container lookup with lazy, duplicate-free creation.
///
/// Keys are interned per category and re-validated against the host on every
/// lookup, so a container deleted or renamed behind the registry's back is
/// looked up by name again instead of being trusted.
pub struct ContainerRegistry {
    interned: HashMap<Category, ContainerKey>,
    reported_conflicts: HashSet<ContainerKey>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self {
            interned: HashMap::new(),
            reported_conflicts: HashSet::new(),
        }
    }

    /// Existing container for `category`, never creating one. The root
    /// category resolves to the scene root.
    pub fn lookup<H: SceneRef + ?Sized>(
        &mut self,
        host: &H,
        category: Category,
    ) -> Option<ContainerKey> {
        let Some(name) = category.container_name() else {
            return host.root().ok();
        };

        if let Some(key) = self.interned.get(&category).copied() {
            if host
                .container(&key)
                .is_some_and(|info| info.name == name)
            {
                return Some(key);
            }
            self.interned.remove(&category);
        }

        let key = host.container_named(name)?;
        self.interned.insert(category, key);
        Some(key)
    }

    /// Returns the container for `category`, creating an engine-owned one
    /// under the root if none exists.
    pub fn ensure<H: SceneMut + ?Sized>(
        &mut self,
        host: &mut H,
        category: Category,
    ) -> Result<EnsuredContainer, SorterError> {
        let Some(name) = category.container_name() else {
            let root = host.root().map_err(|source| SorterError::Registry {
                container: category.to_string(),
                source,
            })?;
            return Ok(EnsuredContainer {
                key: root,
                created: false,
                conflict: None,
            });
        };

        if let Some(key) = self.lookup(&*host, category) {
            let conflict = self.check_conflict(&*host, &key, name);
            return Ok(EnsuredContainer {
                key,
                created: false,
                conflict,
            });
        }

        let registry_error = |source: HostError| SorterError::Registry {
            container: name.to_string(),
            source,
        };

        let root = host.root().map_err(registry_error)?;
        let key = host
            .create_container(name, Owner::Engine, category.color_tag())
            .map_err(registry_error)?;

        if let Err(source) = host.link_child(&root, &key) {
            // an unlinked container would be invisible to the user
            if let Err(cleanup) = host.delete_container(&key) {
                warn!(
                    "Sorter: could not remove unlinked container {} ({}): {}",
                    name, key, cleanup
                );
            }
            return Err(registry_error(source));
        }

        info!("Sorter: created container {} ({})", name, key);
        self.interned.insert(category, key);

        Ok(EnsuredContainer {
            key,
            created: true,
            conflict: None,
        })
    }

    fn check_conflict<H: SceneRef + ?Sized>(
        &mut self,
        host: &H,
        key: &ContainerKey,
        name: &str,
    ) -> Option<SorterError> {
        let info = host.container(key)?;
        if info.owner != Owner::User || !self.reported_conflicts.insert(*key) {
            return None;
        }

        warn!(
            "Sorter: user container {} uses the canonical name {}; sorting into it, it will never be reclaimed",
            key, name
        );
        Some(SorterError::ContainerNameConflict {
            container: key.to_string(),
            name: name.to_string(),
        })
    }

    /// Drops any interned entry for a container that no longer exists.
    pub fn forget(&mut self, key: &ContainerKey) {
        self.interned.retain(|_, interned| interned != key);
        self.reported_conflicts.remove(key);
    }

    pub fn clear(&mut self) {
        self.interned.clear();
        self.reported_conflicts.clear();
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
