//! # Scene Sorter Shared
//! Data model, classification rules and host collaborator traits shared by
//! the scene-sorter engine and host adapters.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod capabilities;
mod classifier;
mod container;
mod entity;
mod host;

pub use capabilities::{
    HostCapabilities, LINE_ART_MODIFIERS_SINCE, STRUCTURED_IMAGE_REFERENCE_SINCE,
};
pub use classifier::{Classification, ClassificationRule, Classifier, PendingReason};
pub use container::{Category, ColorTag, ContainerInfo, ContainerKey, Owner};
pub use entity::{
    AttributeBag, AttributeValue, EntityId, EntityKind, EntitySnapshot, IMAGE_REFERENCE,
    LINE_ART_MODIFIER, MODIFIERS,
};
pub use host::{
    ChangeSubscription, DeferredHandle, Host, HostError, SceneMut, SceneRef, Scheduler,
};
