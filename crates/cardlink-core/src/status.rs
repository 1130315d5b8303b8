//! Human-readable hint describing what the next interaction will do.

use crate::engine::{Engine, Mode};
use crate::hit::CardButton;

/// Resolve the current interaction state to a status-line hint.
///
/// First match wins, in order: pending connection, open info panel, empty
/// focus, open text overlay, then the focused button. The card-body case
/// is the catch-all whenever a card is focused, so there is always a hint.
pub fn status_text(engine: &Engine) -> String {
    let cfg = engine.config();
    let store = engine.store();

    if let Mode::PendingConnection { source } = engine.mode() {
        return format!(
            "Select another card to connect with {}",
            store.card(source).label(cfg)
        );
    }
    if let Mode::InfoOpen { .. } = engine.mode() {
        return "Hide the info to continue".to_string();
    }
    let Some(index) = engine.focus().card else {
        return "Click to add a new card".to_string();
    };
    if let Mode::AwaitingText { .. } = engine.mode() {
        return "Fill in the card text to continue".to_string();
    }

    let label = store.card(index).label(cfg);
    match engine.focus().button {
        Some(CardButton::ShowMore) => format!("Click to show more info of {label}"),
        Some(CardButton::Expand) => format!("Drag to expand {label}"),
        Some(CardButton::Connect) => format!("Click to initiate connection for {label}"),
        None => format!("Drag to move {label}"),
    }
}
