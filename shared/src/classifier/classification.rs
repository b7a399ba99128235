use crate::Category;

/// Why an entity could not be classified yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PendingReason {
    /// Image marker whose structured image reference has not materialized.
    ImageReferenceMissing,
    /// Line-art marker whose modifier stack has not materialized.
    ModifierStackMissing,
}

/// Result of running the rule list over one entity snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Matched(Category),
    /// Signals are still materializing; evaluate again later.
    Pending(PendingReason),
    /// No rule applies. The entity stays where it is.
    Unmatched,
}

impl Classification {
    pub fn category(&self) -> Option<Category> {
        match self {
            Classification::Matched(category) => Some(*category),
            _ => None,
        }
    }
}
