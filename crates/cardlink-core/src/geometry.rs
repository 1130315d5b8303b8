//! Axis-aligned geometry helpers for card frames.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One side of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Whether this side runs horizontally (top or bottom edge).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Containment test, inclusive on all four edges.
///
/// `kurbo::Rect::contains` is half-open on the max edges; hit-testing
/// treats a point on any edge as inside, so the bounds are spelled out.
pub fn contains_point(rect: Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// The directed corner pair of the named side.
///
/// Sides are traversed clockwise: top left to right, right top to bottom,
/// bottom right to left, left bottom to top.
pub fn edge_points(rect: Rect, side: Side) -> (Point, Point) {
    match side {
        Side::Top => (Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y0)),
        Side::Right => (Point::new(rect.x1, rect.y0), Point::new(rect.x1, rect.y1)),
        Side::Bottom => (Point::new(rect.x1, rect.y1), Point::new(rect.x0, rect.y1)),
        Side::Left => (Point::new(rect.x0, rect.y1), Point::new(rect.x0, rect.y0)),
    }
}

/// Midpoint of the named side.
pub fn edge_midpoint(rect: Rect, side: Side) -> Point {
    let (start, end) = edge_points(rect, side);
    Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0)
}
