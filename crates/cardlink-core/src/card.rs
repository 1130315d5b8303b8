//! Card and button geometry model.

use crate::config::CardConfig;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A user-placed rectangle with optional text and outgoing link entries.
///
/// The three button rects are derived from the card frame and never set
/// independently; rebuilding the frame recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the card frame.
    pub width: f64,
    /// Height of the card frame.
    pub height: f64,
    /// Opens the info panel; inset at the top-right corner.
    pub show_more_button: Rect,
    /// Resize grip; inset at the bottom-right corner.
    pub expand_button: Rect,
    /// Starts or completes a connection; inset at the bottom-left corner.
    pub connect_button: Rect,
    /// Label text, set once right after creation.
    pub text: Option<String>,
    /// Store indices of cards linked to this one, in link-creation order.
    pub links: Vec<usize>,
}

impl Card {
    /// Build a card at the given frame, with button rects derived from it.
    pub fn new(cfg: &CardConfig, left: f64, top: f64, width: f64, height: f64) -> Self {
        let size = cfg.button_size;
        Self {
            position: Point::new(left, top),
            width,
            height,
            show_more_button: button_rect(left + width - size, top, size),
            expand_button: button_rect(left + width - size, top + height - size, size),
            connect_button: button_rect(left, top + height - size, size),
            text: None,
            links: Vec::new(),
        }
    }

    /// Build a default-sized card centered on the given point.
    pub fn centered_at(cfg: &CardConfig, center: Point) -> Self {
        Self::new(
            cfg,
            center.x - cfg.default_width / 2.0,
            center.y - cfg.default_height / 2.0,
            cfg.default_width,
            cfg.default_height,
        )
    }

    /// The card frame as a kurbo rect.
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Label shortened to the configured preview length.
    pub fn label(&self, cfg: &CardConfig) -> String {
        display_label(self.text.as_deref().unwrap_or(""), cfg.label_length)
    }
}

fn button_rect(left: f64, top: f64, size: f64) -> Rect {
    Rect::new(left, top, left + size, top + size)
}

/// Take `fresh`'s geometry and buttons while keeping `old`'s text and links.
///
/// Used by drag and resize so rebuilding a card's frame never drops its
/// label or connections. The link list is copied, never shared.
pub fn merge(old: &Card, fresh: Card) -> Card {
    Card {
        text: fresh.text.or_else(|| old.text.clone()),
        links: old.links.clone(),
        ..fresh
    }
}

/// Shorten `text` to its first `max` characters plus an ellipsis.
pub fn display_label(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
