use thiserror::Error;

/// Failures reported by the host's collaborator interfaces.
///
/// Hosts return these instead of raising; the engine decides per variant
/// whether to skip, log or propagate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// No active document or context, usually transient
    #[error("Host context is unavailable")]
    Unavailable,

    /// Entity id is not present in the scene
    #[error("Entity {entity_id} not found in scene")]
    EntityNotFound { entity_id: String },

    /// Container key does not refer to a live container
    #[error("Container {container} not found")]
    ContainerNotFound { container: String },

    /// Another container already uses the requested name
    #[error("Container name {name} is already taken")]
    ContainerNameTaken { name: String },

    /// The host refused a link or unlink
    #[error("Host rejected {operation}: {reason}")]
    LinkRejected {
        operation: &'static str,
        reason: String,
    },
}
