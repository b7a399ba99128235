mod attributes;
mod entity_id;
mod entity_kind;
mod entity_snapshot;

pub use attributes::{
    AttributeBag, AttributeValue, IMAGE_REFERENCE, LINE_ART_MODIFIER, MODIFIERS,
};
pub use entity_id::EntityId;
pub use entity_kind::EntityKind;
pub use entity_snapshot::EntitySnapshot;
