use std::{
    cell::{Cell, RefCell},
    fmt::{Debug, Formatter},
    panic::{self, AssertUnwindSafe},
    rc::{Rc, Weak},
};

use log::{debug, trace, warn};

use crate::{DispatchError, Observer, Slot, SlotFailure, SubscriptionId};

type SharedSlot<Args> = Rc<dyn Fn(Args)>;

/// A typed signal: an ordered list of slots fired with the same `Args` tuple.
///
/// Every operation takes `&self`, so a subject can expose its events through
/// a shared reference and slots may subscribe or unsubscribe while a fire is
/// running. A fire works on the slot list as it was when the fire started:
/// slots added during the fire wait for the next one, slots removed during
/// the fire are still called this time.
pub struct Event<Args> {
    last_id: Cell<SubscriptionId>,
    slots: RefCell<Vec<(SubscriptionId, SharedSlot<Args>)>>,
}

impl<Args: 'static> Event<Args> {
    pub fn new() -> Self {
        Event {
            last_id: Cell::new(SubscriptionId::from(0)),
            slots: RefCell::new(vec![]),
        }
    }

    /// Appends `slot` and returns its handle.
    pub fn subscribe<S>(&self, slot: S) -> SubscriptionId
    where
        S: Slot<Args> + 'static,
    {
        self.push(Rc::new(move |args: Args| slot.call(args)))
    }

    /// Appends `slot` for the whole lifetime of the event.
    pub fn connect<S>(&self, slot: S)
    where
        S: Slot<Args> + 'static,
    {
        self.subscribe(slot);
    }

    /// Appends an observer, keeping it alive while subscribed.
    pub fn subscribe_observer<O>(&self, observer: Rc<O>) -> SubscriptionId
    where
        O: Observer<Args> + ?Sized + 'static,
    {
        self.push(Rc::new(move |args: Args| observer.notify(args)))
    }

    /// Appends an observer without owning it. Once the observer is dropped
    /// its slot stays registered but does nothing.
    pub fn subscribe_weak<O>(&self, observer: &Rc<O>) -> SubscriptionId
    where
        O: Observer<Args> + ?Sized + 'static,
    {
        let observer: Weak<O> = Rc::downgrade(observer);
        self.push(Rc::new(move |args: Args| {
            if let Some(observer) = observer.upgrade() {
                observer.notify(args);
            }
        }))
    }

    /// Removes the slot registered under `id`. Unknown handles are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // Drop the removed slot outside the borrow.
        let removed = {
            let mut slots = self.slots.borrow_mut();
            let index = slots.iter().position(|(slot_id, _)| *slot_id == id);
            index.map(|index| slots.remove(index))
        };
        debug!(
            "Unsubscribe {id}: removed={}, {} slots left",
            removed.is_some(),
            self.len()
        );
        removed.is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.slots.borrow().iter().any(|(slot_id, _)| *slot_id == id)
    }

    /// Live handles in registration order.
    pub fn subscriptions(&self) -> Vec<SubscriptionId> {
        self.slots.borrow().iter().map(|(id, _)| *id).collect()
    }

    fn push(&self, slot: SharedSlot<Args>) -> SubscriptionId {
        let id = self.last_id.get().next();
        self.last_id.set(id);
        self.slots.borrow_mut().push((id, slot));
        trace!("Subscribed {id}");
        id
    }

    fn snapshot(&self) -> Vec<(SubscriptionId, SharedSlot<Args>)> {
        self.slots
            .borrow()
            .iter()
            .map(|(id, slot)| (*id, Rc::clone(slot)))
            .collect()
    }
}

impl<Args: Clone + 'static> Event<Args> {
    /// Calls every slot in registration order. A panicking slot unwinds
    /// through `fire` and the slots after it are skipped.
    pub fn fire(&self, args: Args) {
        let slots = self.snapshot();
        trace!("Firing {} slots", slots.len());
        if let Some(((_, last), rest)) = slots.split_last() {
            for (_, slot) in rest {
                slot(args.clone());
            }
            last(args);
        }
    }

    /// Calls every slot in registration order, catching panics so that one
    /// failing slot does not starve the others.
    pub fn try_fire(&self, args: Args) -> Result<(), DispatchError> {
        let slots = self.snapshot();
        trace!("Firing {} slots, collecting failures", slots.len());
        let failures = slots
            .iter()
            .filter_map(|(id, slot)| {
                let args = args.clone();
                panic::catch_unwind(AssertUnwindSafe(|| slot(args)))
                    .err()
                    .map(|payload| SlotFailure::from_panic(*id, payload))
            })
            .inspect(|failure| {
                warn!(
                    "Slot {} panicked: {}",
                    failure.subscription, failure.message
                )
            })
            .collect::<Vec<_>>();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::SlotsPanicked {
                failures,
                invoked: slots.len(),
            })
        }
    }
}

impl<Args: 'static> Default for Event<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Debug for Event<Args> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("last_id", &self.last_id.get())
            .field("slots", &self.slots.borrow().len())
            .finish()
    }
}
