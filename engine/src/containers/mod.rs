//! Container-side stages of a round: the registry that finds or creates
//! managed containers, the placement executor, the order enforcer and the
//! reclamation sweeper.

pub mod order;
pub mod placement;
mod registry;
mod sweeper;

pub use placement::PlacementOutcome;
pub use registry::{ContainerRegistry, EnsuredContainer};
pub use sweeper::{ReclamationSweeper, SweepOutcome};
