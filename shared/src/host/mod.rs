mod change_feed;
mod error;
mod scene;
mod scheduler;

pub use change_feed::ChangeSubscription;
pub use error::HostError;
pub use scene::{SceneMut, SceneRef};
pub use scheduler::{DeferredHandle, Scheduler};

/// Everything the engine needs from a host.
pub trait Host: SceneMut + Scheduler + ChangeSubscription {}

impl<T: SceneMut + Scheduler + ChangeSubscription> Host for T {}
