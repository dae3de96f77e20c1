//! Bounding containers.
//!
//! A container is the reference frame a dragged element moves within. The
//! controller queries its bounding rect (for the element-offset snapshot at
//! drag start) and its content size (for containment clamping at move
//! time), and asks it once per configuration to establish itself as the
//! positioning reference frame for its children.
//!
//! When no container is configured the whole document area is assumed: the
//! origin is `(0, 0)`, no clamping applies, and no reference frame is
//! established.

use crate::geometry::{Rect, Size};

/// Host-provided bounding container for a dragged element.
pub trait ContainerArea {
    /// Current axis-aligned bounding rect, in device space.
    fn bounds(&self) -> Rect;

    /// Usable content width/height for containment clamping.
    ///
    /// May be smaller than `bounds().size` when the host's layout reserves
    /// space for decoration (borders, scrollbars).
    fn content_size(&self) -> Size {
        self.bounds().size
    }

    /// Establish this container as the positioning reference frame for its
    /// children, so committed offsets are interpreted relative to it.
    ///
    /// Called once whenever the container reference is (re)applied to a
    /// controller; implementations should be idempotent.
    fn establish_reference_frame(&mut self) {}
}

/// A container with fixed, caller-supplied geometry.
///
/// Suitable for hosts whose layout is static between pointer events, and
/// as a test fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedArea {
    bounds: Rect,
    content_size: Size,
    reference_frame: bool,
}

impl FixedArea {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            content_size: bounds.size,
            reference_frame: false,
        }
    }

    /// Override the content size when it differs from the bounding rect.
    pub fn with_content_size(mut self, content_size: Size) -> Self {
        self.content_size = content_size;
        self
    }

    /// Whether this area has been established as a reference frame.
    pub fn is_reference_frame(&self) -> bool {
        self.reference_frame
    }
}

impl ContainerArea for FixedArea {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn establish_reference_frame(&mut self) {
        self.reference_frame = true;
    }
}
