//! Change Notifier: "favorites changed" broadcast.
//!
//! Notifications carry no payload. Listeners re-read the
//! [`FavoritesStore`](crate::FavoritesStore) when called, so several writes
//! observed as fewer notifications still end in the right state.
//!
//! Dispatch is synchronous and in registration order: when
//! [`ChangeNotifier::publish`] returns, every listener has run. A listener that
//! panics is logged and skipped; the rest still run.
//!
//! Listeners are owned by their consumer through a [`Subscription`]. Dropping
//! it (or calling [`Subscription::unsubscribe`]) removes the listener. A view
//! that keeps listening after it unmounts keeps acting on stale context, such
//! as a reader who has since logged out.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use tracing::{trace, warn};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }

    fn take(&mut self, id: u64) -> Option<Listener> {
        let position = self
            .listeners
            .iter()
            .position(|(existing, _)| *existing == id)?;
        Some(self.listeners.remove(position).1)
    }
}

/// Registry of change listeners.
///
/// Cheap to clone; clones share the same listeners.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ChangeNotifier {
    /// A notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    #[must_use = "dropping the subscription unsubscribes the listener immediately"]
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        trace!(listener_id = id, "Listener subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Call every registered listener, in registration order.
    ///
    /// Listeners may subscribe, unsubscribe and read stores while being
    /// notified. Listeners added during a dispatch are first called by the
    /// next one; listeners removed during a dispatch are not called again.
    pub fn publish(&self) {
        let snapshot: Vec<(u64, Listener)> = self.registry.borrow().listeners.clone();
        trace!(listeners = snapshot.len(), "Publishing favorites change");

        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| listener())) {
                warn!(
                    listener_id = id,
                    panic = panic_message(payload.as_ref()),
                    "Favorites listener panicked"
                );
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Unsubscribe capability returned by [`ChangeNotifier::subscribe`].
///
/// The listener is removed when this value is dropped.
#[must_use = "dropping the subscription unsubscribes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether the listener is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Release the borrow before the listener (and whatever it captured)
        // is dropped.
        let removed = registry.borrow_mut().take(self.id);
        if removed.is_some() {
            trace!(listener_id = self.id, "Listener unsubscribed");
        }
        drop(removed);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
