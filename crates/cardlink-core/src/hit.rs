//! Pointer-to-card hit resolution.

use crate::geometry::contains_point;
use crate::store::CardStore;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One of the three fixed buttons on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardButton {
    ShowMore,
    Expand,
    Connect,
}

/// What the pointer currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Focus {
    /// Index of the card under the pointer, if any.
    pub card: Option<usize>,
    /// Button under the pointer within that card; `None` is the card body.
    pub button: Option<CardButton>,
}

/// Resolve a pointer position to a focused card and button.
///
/// Cards are scanned in store order and the first containing frame wins.
/// Within a card, buttons are tested expand, show-more, connect.
pub fn hit_test(store: &CardStore, point: Point) -> Focus {
    let Some(index) = store
        .cards()
        .iter()
        .position(|card| contains_point(card.frame(), point))
    else {
        return Focus::default();
    };

    let card = store.card(index);
    let button = if button_contains(card.expand_button, point) {
        Some(CardButton::Expand)
    } else if button_contains(card.show_more_button, point) {
        Some(CardButton::ShowMore)
    } else if button_contains(card.connect_button, point) {
        Some(CardButton::Connect)
    } else {
        None
    };

    Focus {
        card: Some(index),
        button,
    }
}

/// Button containment, inclusive on all edges.
///
/// The vertical span reuses the button's width; buttons are square, so it
/// equals the height. Switch to `height()` before allowing non-square
/// buttons.
fn button_contains(button: Rect, point: Point) -> bool {
    button.x0 <= point.x
        && point.x <= button.x0 + button.width()
        && button.y0 <= point.y
        && point.y <= button.y0 + button.width()
}
