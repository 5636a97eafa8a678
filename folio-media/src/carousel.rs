//! Cyclic single-slide navigation.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::keys::{Key, KeySignal, KeySubscription};

/// Navigation state over `len` slides.
///
/// The index always lies in `[0, len)`; an empty carousel has no index and
/// every navigation call is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    index: usize,
}

/// One position indicator ("dot") under the visible slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

impl Carousel {
    /// Creates a carousel over `len` slides, starting at the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible slide, or `None` when there are no slides.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Steps forward one slide, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Jumps to slide `k`. Out-of-range indices leave the state unchanged and
    /// return `false`.
    pub fn goto(&mut self, k: usize) -> bool {
        if k >= self.len {
            debug!(index = k, len = self.len, "Ignoring out-of-range carousel jump");
            return false;
        }
        self.index = k;
        true
    }

    /// Left steps back, Right steps forward, anything else is ignored.
    pub fn handle_key(&mut self, key: Key) -> Option<usize> {
        match key {
            Key::Left => self.prev(),
            Key::Right => self.next(),
            _ => self.index(),
        }
    }

    /// One indicator per slide, labelled 1-based.
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len)
            .map(|index| Indicator {
                index,
                active: index == self.index,
                label: format!("Go to image {}", index + 1),
            })
            .collect()
    }

    /// Activates the carousel: its keyboard handler is registered on `signal`
    /// until the returned [`MountedCarousel`] is unmounted or dropped.
    pub fn mount(self, signal: &KeySignal) -> MountedCarousel {
        let state = Rc::new(RefCell::new(self));
        let weak = Rc::downgrade(&state);
        let subscription = signal.subscribe(move |key| {
            if let Some(state) = weak.upgrade() {
                // Busy means the owner is mid-call on this same carousel.
                if let Ok(mut carousel) = state.try_borrow_mut() {
                    carousel.handle_key(key);
                }
            }
        });
        MountedCarousel {
            state,
            subscription,
        }
    }
}

/// A carousel that is currently receiving keyboard input.
///
/// The keyboard handler only ever touches this instance's own state, so any
/// number of carousels can be mounted on the same signal at once.
#[derive(Debug)]
pub struct MountedCarousel {
    state: Rc<RefCell<Carousel>>,
    subscription: KeySubscription,
}

impl MountedCarousel {
    pub fn index(&self) -> Option<usize> {
        self.state.borrow().index()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    pub fn prev(&self) -> Option<usize> {
        self.state.borrow_mut().prev()
    }

    pub fn next(&self) -> Option<usize> {
        self.state.borrow_mut().next()
    }

    pub fn goto(&self, k: usize) -> bool {
        self.state.borrow_mut().goto(k)
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        self.state.borrow().indicators()
    }

    /// Copy of the current navigation state.
    pub fn snapshot(&self) -> Carousel {
        self.state.borrow().clone()
    }

    /// Deactivates the carousel, releasing its keyboard subscription.
    pub fn unmount(self) -> Carousel {
        let Self {
            state,
            subscription,
        } = self;
        subscription.unsubscribe();
        Rc::try_unwrap(state)
            .map(RefCell::into_inner)
            .unwrap_or_else(|shared| shared.borrow().clone())
    }
}
