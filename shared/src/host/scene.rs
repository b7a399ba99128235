use std::collections::HashSet;

use crate::{
    ColorTag, ContainerInfo, ContainerKey, EntityId, EntitySnapshot, HostCapabilities, HostError,
    Owner,
};

/// Read-only view of the host scene.
pub trait SceneRef {
    /// Signals this host can supply to the classifier.
    fn capabilities(&self) -> HostCapabilities;

    /// Full set of current entity ids.
    fn entity_ids(&self) -> Result<HashSet<EntityId>, HostError>;

    fn entity(&self, entity: &EntityId) -> Option<EntitySnapshot>;

    fn has_entity(&self, entity: &EntityId) -> bool {
        self.entity(entity).is_some()
    }

    /// The scene's root container.
    fn root(&self) -> Result<ContainerKey, HostError>;

    fn container(&self, key: &ContainerKey) -> Option<ContainerInfo>;

    fn container_named(&self, name: &str) -> Option<ContainerKey>;

    /// Every container in the document, the root included.
    fn containers(&self) -> Vec<ContainerKey>;

    /// Child containers of `parent`, in display order.
    fn children(&self, parent: &ContainerKey) -> Vec<ContainerKey>;

    /// Containers the entity is a direct member of.
    fn containers_of(&self, entity: &EntityId) -> Vec<ContainerKey>;
}

/// Container mutation. Entities themselves are never created or destroyed
/// through this interface.
pub trait SceneMut: SceneRef {
    fn create_container(
        &mut self,
        name: &str,
        owner: Owner,
        color_tag: Option<ColorTag>,
    ) -> Result<ContainerKey, HostError>;

    fn delete_container(&mut self, key: &ContainerKey) -> Result<(), HostError>;

    fn link_entity(&mut self, container: &ContainerKey, entity: &EntityId)
        -> Result<(), HostError>;

    fn unlink_entity(
        &mut self,
        container: &ContainerKey,
        entity: &EntityId,
    ) -> Result<(), HostError>;

    /// Inserts `child` under `parent` at `index`, clamped to the child count.
    fn link_child_at(
        &mut self,
        parent: &ContainerKey,
        child: &ContainerKey,
        index: usize,
    ) -> Result<(), HostError>;

    fn unlink_child(&mut self, parent: &ContainerKey, child: &ContainerKey)
        -> Result<(), HostError>;

    /// Appends `child` after the existing children of `parent`.
    fn link_child(&mut self, parent: &ContainerKey, child: &ContainerKey) -> Result<(), HostError> {
        let index = self.children(parent).len();
        self.link_child_at(parent, child, index)
    }
}
