use std::{default::Default, time::Duration};

use scene_sorter_shared::Category;

/// Contains Config properties which will be used by the Sorter
#[derive(Clone, Debug)]
pub struct SorterConfig {
    /// A notification whose added-entity count exceeds this value is a
    /// storm and is skipped without advancing the snapshot baseline.
    pub storm_threshold: usize,
    /// Delay before an entity with still-materializing signals is evaluated
    /// again.
    pub deferred_delay: Duration,
    /// How many deferred evaluations an entity gets before it is left where
    /// it is. After that only a change that re-adds the entity or a manual
    /// `classify_all` looks at it again, even if its signals load later.
    pub max_deferred_attempts: u8,
    /// Rounds with more new entities than this log their progress.
    pub progress_log_threshold: usize,
    /// Relative order of the canonical containers under the root.
    pub canonical_order: Vec<Category>,
    /// Containers with these names are never reclaimed, even when
    /// engine-owned and empty.
    pub protected_container_names: Vec<String>,
    /// Whether generic roots (plain geometry) are moved directly under the
    /// root.
    pub place_generic_roots: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            storm_threshold: 100,
            deferred_delay: Duration::from_millis(100),
            max_deferred_attempts: 3,
            progress_log_threshold: 10,
            canonical_order: Category::CANONICAL.to_vec(),
            protected_container_names: vec!["Collection".to_string()],
            place_generic_roots: true,
        }
    }
}
