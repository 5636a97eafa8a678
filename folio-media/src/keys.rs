//! Directional keyboard input.
//!
//! A [`KeySignal`] is an explicit subscription hub standing in for a window
//! level key listener. Each call to [`KeySignal::subscribe`] returns a
//! [`KeySubscription`] guard; the handler stays registered exactly as long as
//! the guard is alive and is removed exactly once, on drop or on
//! [`KeySubscription::unsubscribe`].
//!
//! The hub is single-threaded (`Rc`/`RefCell`), matching the event-driven
//! model of the renderer.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A key press delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Char(char),
}

type Handler = Rc<dyn Fn(Key)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Broadcasts key presses to the currently registered handlers.
#[derive(Clone, Default)]
pub struct KeySignal {
    registry: Rc<RefCell<Registry>>,
}

impl KeySignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` until the returned guard is released.
    #[must_use = "dropping the subscription deregisters the handler immediately"]
    pub fn subscribe(&self, handler: impl Fn(Key) + 'static) -> KeySubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Rc::new(handler)));
        debug!(subscription = id, active = registry.handlers.len(), "Key subscription registered");

        KeySubscription {
            id,
            registry: Rc::downgrade(&self.registry),
            active: true,
        }
    }

    /// Delivers `key` to every handler registered at the time of the call and
    /// returns how many were notified.
    ///
    /// Handlers may subscribe or unsubscribe while being notified; such changes
    /// take effect from the next emission.
    pub fn emit(&self, key: Key) -> usize {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            handler(key);
        }
        handlers.len()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl fmt::Debug for KeySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySignal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Guard for one registered handler.
#[derive(Debug)]
pub struct KeySubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
    active: bool,
}

impl KeySubscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True until the subscription has been released.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Releases the subscription now rather than at end of scope.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        // The hub may already be gone; nothing left to deregister from then.
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            registry.handlers.retain(|(id, _)| *id != self.id);
            debug!(subscription = self.id, active = registry.handlers.len(), "Key subscription released");
        }
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.release();
    }
}
