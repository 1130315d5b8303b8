//! Events delivered by the host shell.

use cardlink_core::ButtonMask;
use serde::{Deserialize, Serialize};

/// An input event from the host: pointer stream, form, or window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Continuous pointer report with the held-button mask.
    PointerMoved { x: f64, y: f64, buttons: ButtonMask },
    /// Discrete primary-button press.
    PointerPressed { x: f64, y: f64 },
    /// The text overlay submitted validated, non-empty text.
    TextSubmitted(String),
    /// The info panel's close action was used.
    InfoClosed,
    /// The viewport changed size.
    Resized { width: f64, height: f64 },
}
