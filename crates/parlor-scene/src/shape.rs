//! Polygon and line-segment drawing primitives.

use crate::color::Color;
use crate::geometry::{Bounds, Size, Vec2};

/// A single drawn primitive, in coordinates relative to its node.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A closed polygon with optional fill and outline.
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        border_width: f32,
        border_color: Color,
    },
    /// A straight line between two points.
    Segment {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

impl Shape {
    /// The smallest bounds enclosing every point of the shape.
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Polygon { points, .. } => bounding(points),
            Shape::Segment { from, to, .. } => bounding(&[*from, *to]),
        }
    }
}

fn bounding(points: &[Vec2]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds::default();
    };
    let (mut min, mut max) = (*first, *first);
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Bounds::new(min.x, min.y, max.x - min.x, max.y - min.y)
}

/// The four corners of an axis-aligned rectangle at the origin, in the
/// winding the drawing primitives expect.
pub fn rect_points(size: Size) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, size.height),
        Vec2::new(size.width, size.height),
        Vec2::new(size.width, 0.0),
    ]
}

/// Whether `points` describe an axis-aligned rectangle.
pub fn is_axis_aligned_rect(points: &[Vec2]) -> bool {
    if points.len() != 4 {
        return false;
    }
    (0..4).all(|i| {
        let a = points[i];
        let b = points[(i + 1) % 4];
        a.x == b.x || a.y == b.y
    })
}

/// Even-odd point-in-polygon test.
pub fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// An ordered list of shapes painted by a single draw node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    shapes: Vec<Shape>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_polygon(
        &mut self,
        points: Vec<Vec2>,
        fill: Color,
        border_width: f32,
        border_color: Color,
    ) {
        self.shapes.push(Shape::Polygon {
            points,
            fill,
            border_width,
            border_color,
        });
    }

    pub fn draw_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.shapes.push(Shape::Segment {
            from,
            to,
            width,
            color,
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
