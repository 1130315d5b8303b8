//! Shell collaborator interface: overlays, status line, warnings.

use cardlink_core::CursorHint;
use kurbo::Point;

/// The presentation operations the app needs from its host shell.
///
/// The text overlay anchors at a new card's top-left corner; the info
/// panel anchors at the focused card's top-right and shows the full,
/// untruncated text.
pub trait Shell {
    /// Blocking user-facing warning; returns once dismissed.
    fn warn(&mut self, message: &str);

    /// Open the text-entry overlay at `anchor`.
    fn open_text_entry(&mut self, anchor: Point);

    /// Open the info panel at `anchor` with the card's text.
    fn open_info(&mut self, anchor: Point, text: &str);

    /// Update the status line.
    fn set_status(&mut self, text: &str);

    /// Update the pointer presentation.
    fn set_cursor(&mut self, hint: CursorHint);
}
