//! Viewport resize events with scoped listener registration.
//!
//! `Viewport::on_resize` returns a `ResizeSubscription`; dropping it removes
//! the listener. The registry is single-threaded (`Rc`/`RefCell`), matching a
//! UI event loop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    /// Number of `dispatch_resize` calls currently on the stack.
    dispatch_depth: Cell<u32>,
    /// Subscriptions dropped while their listener was out for dispatch.
    pending_removals: RefCell<Vec<u64>>,
}

/// Source of window resize events.
#[derive(Clone, Default)]
pub struct Viewport {
    registry: Rc<Registry>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned subscription is dropped.
    pub fn on_resize(&self, listener: impl FnMut() + 'static) -> ResizeSubscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Box::new(listener)));
        debug!(listener_id = id, "resize listener registered");
        ResizeSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Dispatches one resize event to every registered listener.
    pub fn dispatch_resize(&self) {
        // Listeners run outside the borrow so they may (un)register others.
        let mut running = std::mem::take(&mut *self.registry.listeners.borrow_mut());
        let depth = &self.registry.dispatch_depth;
        depth.set(depth.get() + 1);
        for (_, listener) in running.iter_mut() {
            listener();
        }
        depth.set(depth.get() - 1);

        let mut listeners = self.registry.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        *listeners = running;
        listeners.extend(added);

        // A removal may target a listener held by an outer dispatch, so the
        // list is only cleared once the outermost one has restored its own.
        let mut removed = self.registry.pending_removals.borrow_mut();
        if !removed.is_empty() {
            listeners.retain(|(id, _)| !removed.contains(id));
        }
        if depth.get() == 0 {
            removed.clear();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

/// Keeps a resize listener registered for as long as it lives.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct ResizeSubscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if registry.dispatch_depth.get() > 0 {
            registry.pending_removals.borrow_mut().push(self.id);
        } else {
            registry
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
        debug!(listener_id = self.id, "resize listener removed");
    }
}
