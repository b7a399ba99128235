mod engine_state;
mod ignore_list;
mod snapshot_store;

pub use engine_state::{EngineState, SuspendState};
pub use ignore_list::IgnoreList;
pub use snapshot_store::{Diff, SnapshotStore};
