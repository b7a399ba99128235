//! # Classifier
//! Pure mapping from an [`EntitySnapshot`] to a [`Classification`].
//!
//! The classifier never touches the live scene: it reads only the snapshot
//! and the [`HostCapabilities`] it was built with, so every rule can be
//! exercised from a hand-built snapshot.

mod classification;
mod rules;

pub use classification::{Classification, PendingReason};
pub use rules::ClassificationRule;

use crate::{EntitySnapshot, HostCapabilities};

#[derive(Clone, Debug)]
pub struct Classifier {
    capabilities: HostCapabilities,
    rules: Vec<ClassificationRule>,
}

impl Classifier {
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            rules: ClassificationRule::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Drops the generic-root fallback, leaving plain geometry untouched.
    pub fn without_generic_roots(mut self) -> Self {
        self.rules
            .retain(|rule| *rule != ClassificationRule::GenericRoot);
        self
    }

    pub fn capabilities(&self) -> &HostCapabilities {
        &self.capabilities
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// First matching rule wins; no match is `Unmatched`.
    pub fn classify(&self, entity: &EntitySnapshot) -> Classification {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(entity, &self.capabilities))
            .unwrap_or(Classification::Unmatched)
    }
}
