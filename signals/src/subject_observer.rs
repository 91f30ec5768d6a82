/// An object that reacts to an [`crate::Event`] carrying `Args`.
///
/// Register it with [`crate::Event::subscribe_observer`] to keep it alive for
/// as long as the subscription, or with [`crate::Event::subscribe_weak`] to
/// let its owner decide.
pub trait Observer<Args> {
    fn notify(&self, args: Args);
}
