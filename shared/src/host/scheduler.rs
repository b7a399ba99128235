use std::{fmt, time::Duration};

/// Opaque token the engine hands to the scheduler and receives back when the
/// timer fires.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct DeferredHandle(u32);

impl DeferredHandle {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeferredHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deferred({})", self.0)
    }
}

/// One-shot timer on the host's main loop.
///
/// When the delay elapses the host calls back into the engine with the same
/// handle. There is no cancellation.
pub trait Scheduler {
    fn schedule(&mut self, handle: DeferredHandle, delay: Duration);
}
