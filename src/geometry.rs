//! Geometry primitives for the two coordinate spaces a drag crosses.
//!
//! Pointer events arrive in *device* coordinates ([`Point`]); the committed
//! drag result lives in *container* coordinates ([`Position`], an offset
//! from the container's top-left corner). Keeping the two as distinct types
//! prevents the classic bug of mixing spaces in delta math.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in device (screen) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Device-space origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An element offset in container space: distance from the container's
/// top-left corner to the element's top-left corner.
///
/// Non-negative when containment clamping is in effect, otherwise
/// unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f32,
    pub top: f32,
}

impl Position {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
    };

    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.left + rhs.left, self.top + rhs.top)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.left - rhs.left, self.top - rhs.top)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding rectangle in device space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Offset of this rect's origin relative to another rect's origin,
    /// expressed in container space.
    pub fn offset_from(&self, container_origin: Point) -> Position {
        let delta = self.origin - container_origin;
        Position::new(delta.x, delta.y)
    }
}
