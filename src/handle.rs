//! Element measurement handle.
//!
//! The host binds this handle to exactly one rendered element and keeps it
//! updated with the element's current bounding rectangle after each layout
//! pass. The controller reads through the same handle: origin and size at
//! drag start, size again on every move (containment uses the *current*
//! element size).
//!
//! Clones share the same binding, so the host-side layout code and the
//! controller see one source of truth. While unbound (element not mounted),
//! every controller operation that needs geometry is a silent no-op.

use crate::geometry::Rect;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared, cloneable binding between a rendered element and its controller.
#[derive(Clone, Default)]
pub struct ElementHandle {
    inner: Arc<RwLock<Option<Rect>>>,
}

impl ElementHandle {
    /// A fresh, unbound handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind (or re-bind) the handle to the element's current bounding rect.
    ///
    /// Call this after every layout pass that can move or resize the
    /// element.
    pub fn bind(&self, rect: Rect) {
        *self.inner.write() = Some(rect);
    }

    /// Detach the handle (element unmounted).
    pub fn unbind(&self) {
        *self.inner.write() = None;
    }

    /// Current bounding rect, or `None` while unbound.
    pub fn rect(&self) -> Option<Rect> {
        *self.inner.read()
    }

    pub fn is_bound(&self) -> bool {
        self.inner.read().is_some()
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHandle")
            .field("rect", &self.rect())
            .finish()
    }
}
