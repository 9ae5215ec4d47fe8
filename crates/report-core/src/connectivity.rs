//! Online/offline status as a subscribable signal.
//!
//! Purely event-driven: the host pushes transitions in via
//! [`OnlineSignal::set_online`] and listeners are notified synchronously.
//! If the host never fires events the last-known value simply stays current.
//! Single-threaded by design, matching the UI-thread execution model.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener = Rc<dyn Fn(bool)>;

struct SignalInner {
    online: Cell<bool>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared boolean connectivity signal.
#[derive(Clone)]
pub struct OnlineSignal {
    inner: Rc<SignalInner>,
}

impl OnlineSignal {
    /// Create a signal seeded from the platform's current reachability
    /// indicator.
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                online: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn is_online(&self) -> bool {
        self.inner.online.get()
    }

    /// Record a transition. Listeners run synchronously; repeated calls with
    /// an unchanged value notify nobody.
    ///
    /// A listener may subscribe or unsubscribe during its notification:
    /// the borrow is never held across a callback. A listener unregistered
    /// mid-notification is skipped; one registered mid-notification first
    /// hears the next transition.
    pub fn set_online(&self, online: bool) {
        if self.inner.online.replace(online) == online {
            return;
        }
        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        for (id, listener) in snapshot {
            let still_registered = self
                .inner
                .listeners
                .borrow()
                .iter()
                .any(|(lid, _)| *lid == id);
            if still_registered {
                listener(online);
            }
        }
    }

    /// Register a listener for transitions. The listener stays registered
    /// until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            inner: Rc::clone(&self.inner),
            id,
        }
    }
}

/// Scoped listener registration; dropping it unregisters the listener.
pub struct Subscription {
    inner: Rc<SignalInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_reports_initial_value() {
        assert!(OnlineSignal::new(true).is_online());
        assert!(!OnlineSignal::new(false).is_online());
    }

    #[test]
    fn listeners_see_each_transition_once() {
        let signal = OnlineSignal::new(true);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = signal.subscribe(move |online| sink.borrow_mut().push(online));

        signal.set_online(false);
        signal.set_online(false); // no transition, no notification
        signal.set_online(true);

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn dropping_the_subscription_stops_notifications() {
        let signal = OnlineSignal::new(true);
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let sub = signal.subscribe(move |_| sink.set(sink.get() + 1));

        signal.set_online(false);
        drop(sub);
        signal.set_online(true);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn value_persists_without_events() {
        let signal = OnlineSignal::new(false);
        let clone = signal.clone();
        assert!(!clone.is_online());
        signal.set_online(true);
        assert!(clone.is_online());
    }

    #[test]
    fn listener_may_unsubscribe_another_during_notification() {
        let signal = OnlineSignal::new(true);
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        // First listener tears down the second one mid-notification
        let teardown = Rc::clone(&slot);
        let _first = signal.subscribe(move |_| {
            teardown.borrow_mut().take();
        });
        let sink = Rc::clone(&count);
        let second = signal.subscribe(move |_| sink.set(sink.get() + 1));
        *slot.borrow_mut() = Some(second);

        signal.set_online(false);

        // Removed before its turn, so it never fires
        assert_eq!(count.get(), 0);
        signal.set_online(true);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn listener_may_drop_its_own_subscription() {
        let signal = OnlineSignal::new(true);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let held = Rc::clone(&slot);
        let sub = signal.subscribe(move |_| {
            held.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        signal.set_online(false);
        assert!(slot.borrow().is_none());
        signal.set_online(true); // no longer registered, nothing to notify
    }

    #[test]
    fn listener_may_resubscribe_during_notification() {
        let signal = OnlineSignal::new(true);
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        // Installs a companion subscription mid-notification, the way a
        // host wiring up its status callback lazily would
        let rewire_signal = signal.clone();
        let rewire_slot = Rc::clone(&slot);
        let sink = Rc::clone(&count);
        let _first = signal.subscribe(move |_| {
            if rewire_slot.borrow().is_some() {
                return;
            }
            let sink = Rc::clone(&sink);
            let sub = rewire_signal.subscribe(move |_| sink.set(sink.get() + 1));
            *rewire_slot.borrow_mut() = Some(sub);
        });

        signal.set_online(false); // installs the companion
        assert_eq!(count.get(), 0); // registered mid-notification, not called yet
        signal.set_online(true);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn multiple_subscribers_are_independent() {
        let signal = OnlineSignal::new(true);
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let sink_a = Rc::clone(&a);
        let sink_b = Rc::clone(&b);
        let sub_a = signal.subscribe(move |_| sink_a.set(sink_a.get() + 1));
        let _sub_b = signal.subscribe(move |_| sink_b.set(sink_b.get() + 1));

        signal.set_online(false);
        drop(sub_a);
        signal.set_online(true);

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
    }
}
