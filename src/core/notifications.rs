//! Notification inbox and the subscription seam it is fed through.
//!
//! The realtime transport is not part of this crate: anything able to push
//! `NotificationEvent`s for a user implements `EventSource` and is handed to
//! the inbox explicitly. `LocalEventBus` is the in-process implementation.

use crate::models::notification::{Notification, NotificationEvent};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn Fn(&NotificationEvent)>;

pub trait EventSource {
    /// Deliver every event addressed to `user_id` to `listener` until
    /// unsubscribed.
    fn subscribe(&self, user_id: &str, listener: Listener) -> SubscriptionId;

    /// Returns false when `id` was not subscribed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

struct Subscriber {
    id: SubscriptionId,
    user_id: String,
    listener: Rc<dyn Fn(&NotificationEvent)>,
}

/// Single-threaded publish/subscribe hub.
#[derive(Default)]
pub struct LocalEventBus {
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `event` to every subscriber of `user_id`. Returns how many
    /// listeners received it.
    ///
    /// Listeners run after the subscriber list is released, so they may
    /// subscribe or unsubscribe on this bus themselves.
    pub fn publish(&self, user_id: &str, event: &NotificationEvent) -> usize {
        let targets: Vec<Rc<dyn Fn(&NotificationEvent)>> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| Rc::clone(&s.listener))
            .collect();

        for listener in &targets {
            listener(event);
        }
        debug!(user_id, delivered = targets.len(), "notification event published");
        targets.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl EventSource for LocalEventBus {
    fn subscribe(&self, user_id: &str, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            user_id: user_id.to_string(),
            listener: Rc::from(listener),
        });
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }
}

/// Newest-first list of notifications, deduplicated by id.
#[derive(Debug, Default, Clone)]
pub struct NotificationInbox {
    items: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    /// Returns false (and changes nothing) when the id is already known.
    pub fn receive(&mut self, notification: Notification) -> bool {
        if self.items.iter().any(|n| n.id == notification.id) {
            return false;
        }
        self.items.insert(0, notification);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, event: &NotificationEvent) {
        match event {
            NotificationEvent::Created(n) => {
                self.receive(n.clone());
            }
            NotificationEvent::Deleted { id } => {
                self.remove(id);
            }
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Feed `inbox` from `source` for `user_id`.
    pub fn attach(
        inbox: &Rc<RefCell<NotificationInbox>>,
        source: &dyn EventSource,
        user_id: &str,
    ) -> SubscriptionId {
        let inbox = Rc::clone(inbox);
        source.subscribe(
            user_id,
            Box::new(move |event| inbox.borrow_mut().apply(event)),
        )
    }
}
