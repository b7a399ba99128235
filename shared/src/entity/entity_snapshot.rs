use super::{AttributeBag, EntityId, EntityKind};

/// Read-only copy of everything the classifier may look at for one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub attributes: AttributeBag,
}

impl EntitySnapshot {
    pub fn new(id: EntityId, kind: EntityKind, name: &str) -> Self {
        Self {
            id,
            kind,
            name: name.to_string(),
            attributes: AttributeBag::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: AttributeBag) -> Self {
        self.attributes = attributes;
        self
    }
}
