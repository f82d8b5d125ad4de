//! Points, sizes and axis-aligned bounds in scene space.
//!
//! Scene space is y-up: the origin of a node is its bottom-left corner and
//! `y` grows toward the top of the screen.  One unit is one terminal cell.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point or displacement in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Anchor presets, expressed as fractions of a node's size.
pub mod anchor {
    use super::Vec2;

    pub const LEFT_BOTTOM: Vec2 = Vec2::new(0.0, 0.0);
    pub const LEFT_TOP: Vec2 = Vec2::new(0.0, 1.0);
    pub const RIGHT_TOP: Vec2 = Vec2::new(1.0, 1.0);
    pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);
}

/// A width and height in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Size,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Bounds of the given size placed at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Vec2::ZERO,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y
    }

    pub fn top(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Half-open containment: the left and bottom edges are inside, the
    /// right and top edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.bottom()
            && point.y < self.top()
    }

    /// These bounds moved by `offset`.
    pub fn translate(&self, offset: Vec2) -> Bounds {
        Bounds {
            origin: self.origin + offset,
            size: self.size,
        }
    }

    /// The overlapping region, or `None` when the bounds do not overlap.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let bottom = self.bottom().max(other.bottom());
        let top = self.top().min(other.top());
        if right <= left || top <= bottom {
            return None;
        }
        Some(Bounds::new(left, bottom, right - left, top - bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let b = Bounds::new(0.0, 0.0, 10.0, 5.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(9.9, 4.9)));
        assert!(!b.contains(Vec2::new(10.0, 2.0)));
        assert!(!b.contains(Vec2::new(2.0, 5.0)));
        assert!(!b.contains(Vec2::new(-0.1, 2.0)));
    }

    #[test]
    fn translate_moves_origin_only() {
        let b = Bounds::new(1.0, 2.0, 3.0, 4.0).translate(Vec2::new(1.0, -2.0));
        assert_eq!(b, Bounds::new(2.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn intersect_overlapping() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 8.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(Bounds::new(5.0, 8.0, 5.0, 2.0)));
    }

    #[test]
    fn intersect_disjoint() {
        let a = Bounds::new(0.0, 0.0, 2.0, 2.0);
        let b = Bounds::new(2.0, 0.0, 2.0, 2.0);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn vector_arithmetic() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0) - Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(3.0, 5.0));
        assert_eq!(v * 2.0, Vec2::new(6.0, 10.0));
        assert_eq!(-v, Vec2::new(-3.0, -5.0));
    }
}
