//! Typed, single-threaded signals: subjects own [`Event`]s, observers attach
//! slots to them and keep the returned [`SubscriptionId`] to detach later.

mod error;
mod event;
mod handle;
mod slot;
pub mod subject_observer;

pub use error::{DispatchError, SlotFailure};
pub use event::Event;
pub use handle::SubscriptionId;
pub use slot::Slot;
pub use subject_observer::Observer;
