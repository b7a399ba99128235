use log::{info, warn};

use crate::state::Diff;

/// Outcome of checking a diff against the storm threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Admit,
    Storm { added: usize, threshold: usize },
}

/// Detects notification storms. A storm round is skipped without advancing
/// the baseline, so its entities are picked up again later rather than lost.
#[derive(Clone, Debug)]
pub struct RateGovernor {
    threshold: usize,
    progress_threshold: usize,
}

impl RateGovernor {
    pub fn new(threshold: usize, progress_threshold: usize) -> Self {
        Self {
            threshold,
            progress_threshold,
        }
    }

    pub fn admit(&self, diff: &Diff) -> Admission {
        let added = diff.added.len();
        if added > self.threshold {
            warn!(
                "Sorter: {} new entities exceed the storm threshold of {}, deferring until the next notification",
                added, self.threshold
            );
            return Admission::Storm {
                added,
                threshold: self.threshold,
            };
        }
        Admission::Admit
    }

    /// Progress reporter for a round of `total` entities; silent for small
    /// rounds.
    pub fn progress(&self, total: usize) -> Progress {
        Progress {
            total,
            enabled: total > self.progress_threshold,
            last_logged: 0,
        }
    }
}

/// Logs round progress in quarter steps.
pub struct Progress {
    total: usize,
    enabled: bool,
    last_logged: usize,
}

impl Progress {
    pub fn tick(&mut self, done: usize) {
        if !self.enabled || self.total == 0 {
            return;
        }
        let percent = done * 100 / self.total;
        let step = percent / 25 * 25;
        if step > self.last_logged {
            self.last_logged = step;
            info!("Sorter: sorting... {}% ({}/{})", step, done, self.total);
        }
    }
}
