//! # Scene Sorter Engine
//! Watches a host scene graph, classifies newly appeared entities into
//! semantic groups and places them into managed containers, keeping the
//! canonical containers ordered and reclaiming the ones that empty out.
//!
//! A round runs synchronously inside the host's change callback:
//!
//! change feed -> rate governor -> classifier -> placement -> order -> sweep
//!
//! gated by the suspend/resume machine. Entities whose signals have not
//! materialized yet are re-evaluated later through the host scheduler.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

mod change_feed;
pub mod containers;
pub mod deferred;
mod error;
pub mod governor;
mod report;
mod sorter;
pub mod state;

pub use error::SorterError;
pub use report::{PlacementRecord, RoundReport, SkipReason, Trigger};
pub use sorter::{Sorter, SorterConfig};
