//! Orthogonal connector routing between two cards.

use crate::card::Card;
use crate::geometry::{edge_midpoint, Side};
use kurbo::Point;

/// Compute the three-point elbow polyline linking `source` to `destination`.
///
/// The edge pair is picked from the quadrant of the destination's top-left
/// corner relative to the source's. The elbow keeps both legs axis-aligned:
/// leaving a horizontal edge the first leg is vertical, leaving a vertical
/// edge it is horizontal. The sign match is exhaustive, so every card pair
/// routes.
pub fn compute_path(source: &Card, destination: &Card) -> [Point; 3] {
    let dx = destination.position.x - source.position.x;
    let dy = destination.position.y - source.position.y;

    let (source_side, dest_side) = match (dx >= 0.0, dy >= 0.0) {
        (true, true) => (Side::Bottom, Side::Left),
        (true, false) => (Side::Right, Side::Bottom),
        (false, true) => (Side::Left, Side::Top),
        (false, false) => (Side::Top, Side::Right),
    };

    let start = edge_midpoint(source.frame(), source_side);
    let end = edge_midpoint(destination.frame(), dest_side);
    let elbow = if source_side.is_horizontal() {
        Point::new(start.x, end.y)
    } else {
        Point::new(end.x, start.y)
    };

    [start, elbow, end]
}
