//! Drawing-surface collaborator interface.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface lost: {0}")]
    Lost(String),
    #[error("present failed: {0}")]
    Present(String),
}

/// The drawing operations the engine needs from a painting backend.
///
/// One scene is built per store change: `clear` opens the frame at the
/// current viewport size and `present` commits it.
pub trait Surface {
    /// Clear the surface and size it to the viewport.
    fn clear(&mut self, viewport: Size);

    /// Stroke a rounded rectangle outline.
    fn rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    /// Draw a single line of text with its baseline origin at `origin`.
    fn text(&mut self, origin: Point, size: f64, text: &str, color: Color);

    /// Stroke an open polyline through `points`.
    fn polyline(&mut self, points: &[Point], color: Color);

    /// Commit the frame.
    fn present(&mut self) -> Result<(), SurfaceError>;
}
