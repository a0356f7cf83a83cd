//! Scoped event subscriptions.
//!
//! A [`Subscription`] owns the release action of whatever it was acquired
//! from. Releasing is idempotent and also happens on drop, so a primitive that
//! is torn down can never leave a listener attached to the host.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type PointerHandler = Box<dyn FnMut(Vec2)>;

/// Release guard for a listener, timer or any other host registration.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Run the release action. Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Source of top-level pointer-move events (viewport coordinates).
pub trait PointerSource {
    fn subscribe(&self, handler: PointerHandler) -> Subscription;
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    handlers: FnvHashMap<u64, PointerHandler>,
    dispatching: bool,
    released: SmallVec<[u64; 4]>,
}

impl HubInner {
    fn release(&mut self, id: u64) -> Option<PointerHandler> {
        let removed = self.handlers.remove(&id);
        if removed.is_none() && self.dispatching {
            self.released.push(id);
        }
        removed
    }
}

/// In-process pointer source. Handlers are called in subscription order.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one pointer move to every live handler.
    pub fn dispatch(&self, pos: Vec2) {
        // Handlers are taken out for the call so they may subscribe or
        // release without a re-entrant borrow.
        let mut taken: Vec<(u64, PointerHandler)> = {
            let mut inner = self.inner.borrow_mut();
            inner.dispatching = true;
            inner.handlers.drain().collect()
        };
        taken.sort_by_key(|(id, _)| *id);
        for (_, handler) in taken.iter_mut() {
            handler(pos);
        }
        let mut dropped = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            let released = std::mem::take(&mut inner.released);
            for (id, handler) in taken {
                if released.contains(&id) {
                    dropped.push(handler);
                } else {
                    inner.handlers.insert(id, handler);
                }
            }
            inner.dispatching = false;
        }
        // Handlers may own guards into this hub; drop them unborrowed.
        drop(dropped);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl PointerSource for PointerHub {
    fn subscribe(&self, handler: PointerHandler) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.insert(id, handler);
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let removed = inner.borrow_mut().release(id);
                drop(removed);
            }
        })
    }
}
