//! Synchronous change observers.
//!
//! A list keeps one [`Observers`] registry. Notifications carry no payload;
//! observers record that something changed and re-query the list afterwards.
//! Callbacks run in subscription order inside the mutating call, so they must
//! not (and cannot, given the `&mut` borrow) reach back into the list.

use std::fmt;

/// Handle returned by [`List::subscribe`](crate::List::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self) {
        for (_, callback) in &mut self.entries {
            callback();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_fire_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            observers.subscribe(Box::new(move || log.borrow_mut().push(tag)));
        }
        observers.notify();

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_observers_stay_quiet() {
        let hits = Rc::new(RefCell::new(0));
        let mut observers = Observers::default();

        let counter = Rc::clone(&hits);
        let id = observers.subscribe(Box::new(move || *counter.borrow_mut() += 1));

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify();

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(observers.len(), 0);
    }
}
