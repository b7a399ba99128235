mod deferred_queue;

pub use deferred_queue::{DeferredQueue, DeferredTask};
