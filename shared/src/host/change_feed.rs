/// Registration of the engine's no-payload "something changed" callback.
pub trait ChangeSubscription {
    fn subscribe_changes(&mut self);

    fn unsubscribe_changes(&mut self);
}
