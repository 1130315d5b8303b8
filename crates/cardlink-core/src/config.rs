//! Card geometry constants threaded through the engine.

use serde::{Deserialize, Serialize};

/// Fixed geometry used when building and manipulating cards.
///
/// A single immutable value owned by the engine and handed to the
/// components that need it, rather than module-level globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Width of a freshly created card.
    pub default_width: f64,
    /// Height of a freshly created card.
    pub default_height: f64,
    /// Smallest width a resize may produce.
    pub min_width: f64,
    /// Smallest height a resize may produce.
    pub min_height: f64,
    /// Side length of the three square card buttons.
    pub button_size: f64,
    /// Corner radius for card and button frames.
    pub corner_radius: f64,
    /// Font size for card labels.
    pub text_size: f64,
    /// Padding between the card frame and its label.
    pub text_padding: f64,
    /// Character count shown before a label is shortened.
    pub label_length: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            default_width: 200.0,
            default_height: 100.0,
            min_width: 90.0,
            min_height: 90.0,
            button_size: 40.0,
            corner_radius: 10.0,
            text_size: 20.0,
            text_padding: 8.0,
            label_length: 5,
        }
    }
}
