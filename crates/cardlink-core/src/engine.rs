//! Interaction state machine arbitrating pointer and form events.

use crate::card::{merge, Card};
use crate::config::CardConfig;
use crate::hit::{hit_test, CardButton, Focus};
use crate::store::CardStore;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Raw pressed-button mask delivered by the host pointer source.
///
/// The host reports one bit per held button; "primary pressed" means the
/// mask is exactly the single primary-button bit, so a chord with any
/// other button does not count as a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    /// No buttons held.
    pub const NONE: Self = Self(0);
    /// Only the primary button held.
    pub const PRIMARY: Self = Self(1);

    /// True when the primary button alone is held.
    pub fn primary(self) -> bool {
        self == Self::PRIMARY
    }
}

/// Which modal flow the editor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// A card was just created and its text overlay is open; pointer
    /// handling is suspended until the text is submitted.
    AwaitingText { card: usize },
    /// The info panel is open for a card; pointer handling is suspended
    /// until it is closed.
    InfoOpen { card: usize },
    /// A connect button was clicked; waiting for a click on the second
    /// card's connect button.
    PendingConnection { source: usize },
}

impl Mode {
    fn suspends_pointer(self) -> bool {
        matches!(self, Mode::AwaitingText { .. } | Mode::InfoOpen { .. })
    }
}

/// What a drag session does to its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Body drag: translate the card.
    Move,
    /// Expand-button drag: grow or shrink from the top-left anchor.
    Resize,
}

/// Transient record of an in-progress drag, live while the primary button
/// stays held.
#[derive(Debug, Clone)]
struct DragSession {
    /// Pointer position at the first held move.
    origin: Point,
    /// Index of the card being manipulated.
    card: usize,
    /// Deep copy of the card taken when the session started.
    snapshot: Card,
    /// `None` when the held button pins a non-draggable control; the
    /// session then only keeps focus stable.
    kind: Option<DragKind>,
}

/// Result of a pointer press, for the shell to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing happened (drag-only control, or a modal overlay is open).
    None,
    /// A card was created at this index; its text overlay should open.
    CardCreated(usize),
    /// The info panel should open for this card.
    InfoOpened(usize),
    /// The first endpoint of a connection was chosen.
    ConnectionStarted(usize),
    /// The press completed a connection: `source` (the card just clicked)
    /// now lists `dest`, and the line is drawn from `dest` into `source`.
    ConnectionCompleted { source: usize, dest: usize },
    /// Connecting needs at least two cards; the shell should warn.
    ConnectionRefused,
}

/// Pointer presentation hint for the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Plain arrow.
    #[default]
    Default,
    ShowMore,
    Expand,
    Connect,
    /// Open hand over a draggable card body.
    Grab,
}

/// The interaction engine: owns the card store and arbitrates pointer and
/// form events into mutations of it.
///
/// All mutation is synchronous inside one event handler; a monotonically
/// increasing revision marks store changes so the shell can redraw exactly
/// once per change.
#[derive(Debug, Clone)]
pub struct Engine {
    config: CardConfig,
    store: CardStore,
    mode: Mode,
    focus: Focus,
    pointer: Point,
    drag: Option<DragSession>,
    revision: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}

impl Engine {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            store: CardStore::new(),
            mode: Mode::default(),
            focus: Focus::default(),
            pointer: Point::ZERO,
            drag: None,
            revision: 0,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Bumped on every store mutation. The shell redraws when this moves
    /// past the revision it last painted.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Feed a pointer move carrying the current held-button mask.
    ///
    /// While a text or info overlay is open the move is dropped entirely:
    /// no drag, no hit-testing. Otherwise a held primary button starts or
    /// continues a drag session, and focus is re-resolved only while no
    /// button is held, so it stays stable for a whole drag.
    pub fn pointer_moved(&mut self, position: Point, buttons: ButtonMask) {
        if self.mode.suspends_pointer() {
            return;
        }

        if self.drag.is_none() {
            if buttons.primary() {
                if let Some(card) = self.focus.card {
                    self.drag = Some(DragSession {
                        origin: position,
                        card,
                        snapshot: self.store.card(card).clone(),
                        kind: match self.focus.button {
                            None => Some(DragKind::Move),
                            Some(CardButton::Expand) => Some(DragKind::Resize),
                            Some(_) => None,
                        },
                    });
                }
            }
        } else if !buttons.primary() {
            self.drag = None;
        }

        self.pointer = position;

        if buttons.primary() {
            self.apply_drag();
        } else {
            self.focus = hit_test(&self.store, position);
        }
    }

    /// Feed a primary-button press at the given position.
    ///
    /// Dispatches on the focus resolved at the last unheld move; the
    /// position only places a newly created card.
    pub fn pointer_pressed(&mut self, position: Point) -> PressOutcome {
        if self.mode.suspends_pointer() {
            return PressOutcome::None;
        }

        let Some(index) = self.focus.card else {
            let card = Card::centered_at(&self.config, position);
            let index = self.store.add(card);
            self.mode = Mode::AwaitingText { card: index };
            self.revision += 1;
            log::debug!("created card {index} centered on ({}, {})", position.x, position.y);
            return PressOutcome::CardCreated(index);
        };

        match self.focus.button {
            Some(CardButton::ShowMore) => {
                self.mode = Mode::InfoOpen { card: index };
                PressOutcome::InfoOpened(index)
            }
            Some(CardButton::Connect) => {
                if self.store.len() < 2 {
                    log::debug!("refused connection: store holds {} card(s)", self.store.len());
                    return PressOutcome::ConnectionRefused;
                }
                if let Mode::PendingConnection { source } = self.mode {
                    self.store.connect(index, source);
                    self.mode = Mode::Idle;
                    self.revision += 1;
                    log::debug!("connected card {index} with card {source}");
                    PressOutcome::ConnectionCompleted {
                        source: index,
                        dest: source,
                    }
                } else {
                    self.mode = Mode::PendingConnection { source: index };
                    PressOutcome::ConnectionStarted(index)
                }
            }
            Some(CardButton::Expand) | None => PressOutcome::None,
        }
    }

    /// Accept the text entered in the overlay for the awaited card.
    ///
    /// The overlay collaborator enforces non-empty input before submitting.
    pub fn submit_text(&mut self, text: String) {
        let Mode::AwaitingText { card } = self.mode else {
            return;
        };
        let mut updated = self.store.card(card).clone();
        updated.text = Some(text);
        self.store.replace(card, updated);
        self.mode = Mode::Idle;
        self.revision += 1;
    }

    /// Close the info panel.
    pub fn close_info(&mut self) {
        if let Mode::InfoOpen { .. } = self.mode {
            self.mode = Mode::Idle;
        }
    }

    /// Pointer presentation for the current state.
    pub fn cursor_hint(&self) -> CursorHint {
        if self.mode.suspends_pointer() || self.focus.card.is_none() {
            return CursorHint::Default;
        }
        match self.focus.button {
            Some(CardButton::ShowMore) => CursorHint::ShowMore,
            Some(CardButton::Expand) => CursorHint::Expand,
            Some(CardButton::Connect) => CursorHint::Connect,
            None => CursorHint::Grab,
        }
    }

    /// Apply the active session's delta to its card.
    fn apply_drag(&mut self) {
        let Some(session) = &self.drag else { return };
        let Some(kind) = session.kind else { return };

        let delta = self.pointer - session.origin;
        let snapshot = &session.snapshot;
        let current = self.store.card(session.card);

        let fresh = match kind {
            DragKind::Move => Card::new(
                &self.config,
                snapshot.position.x + delta.x,
                snapshot.position.y + delta.y,
                current.width,
                current.height,
            ),
            DragKind::Resize => Card::new(
                &self.config,
                snapshot.position.x,
                snapshot.position.y,
                (snapshot.width + delta.x).max(self.config.min_width),
                (snapshot.height + delta.y).max(self.config.min_height),
            ),
        };

        let updated = merge(current, fresh);
        self.store.replace(session.card, updated);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_card(left: f64, top: f64, text: &str) -> Engine {
        let mut engine = Engine::default();
        let center = Point::new(left + 100.0, top + 50.0);
        engine.pointer_moved(center, ButtonMask::NONE);
        let outcome = engine.pointer_pressed(center);
        assert!(matches!(outcome, PressOutcome::CardCreated(_)));
        engine.submit_text(text.to_string());
        engine
    }

    #[test]
    fn test_press_on_empty_surface_creates_card() {
        let mut engine = Engine::default();
        engine.pointer_moved(Point::new(200.0, 150.0), ButtonMask::NONE);

        let outcome = engine.pointer_pressed(Point::new(200.0, 150.0));
        assert_eq!(outcome, PressOutcome::CardCreated(0));
        assert_eq!(engine.mode(), Mode::AwaitingText { card: 0 });

        let card = engine.store().card(0);
        assert_eq!(card.position, Point::new(100.0, 100.0));
        assert!((card.width - 200.0).abs() < f64::EPSILON);
        assert!((card.height - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_submit_text_targets_created_card() {
        let mut engine = Engine::default();
        engine.pointer_moved(Point::new(200.0, 150.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(200.0, 150.0));

        engine.submit_text("plan".to_string());

        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.store().card(0).text.as_deref(), Some("plan"));
    }

    #[test]
    fn test_pointer_suspended_while_awaiting_text() {
        let mut engine = Engine::default();
        engine.pointer_moved(Point::new(200.0, 150.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(200.0, 150.0));

        // Overlay is open: moves and presses change nothing.
        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::NONE);
        assert_eq!(engine.focus(), Focus::default());
        let outcome = engine.pointer_pressed(Point::new(600.0, 600.0));
        assert_eq!(outcome, PressOutcome::None);
        assert_eq!(engine.store().len(), 1);
    }

    #[test]
    fn test_show_more_opens_info_until_closed() {
        let mut engine = engine_with_card(100.0, 100.0, "alpha");

        // show-more button is the card's top-right inset.
        engine.pointer_moved(Point::new(280.0, 120.0), ButtonMask::NONE);
        let outcome = engine.pointer_pressed(Point::new(280.0, 120.0));
        assert_eq!(outcome, PressOutcome::InfoOpened(0));
        assert_eq!(engine.mode(), Mode::InfoOpen { card: 0 });

        // Presses are suspended until the panel closes.
        let outcome = engine.pointer_pressed(Point::new(600.0, 600.0));
        assert_eq!(outcome, PressOutcome::None);

        engine.close_info();
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn test_connect_refused_with_single_card() {
        let mut engine = engine_with_card(100.0, 100.0, "only");

        engine.pointer_moved(Point::new(120.0, 180.0), ButtonMask::NONE);
        let before = engine.revision();
        let outcome = engine.pointer_pressed(Point::new(120.0, 180.0));

        assert_eq!(outcome, PressOutcome::ConnectionRefused);
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.revision(), before);
        assert!(engine.store().card(0).links.is_empty());
    }

    #[test]
    fn test_connect_flow_records_link_on_second_card() {
        let mut engine = engine_with_card(100.0, 100.0, "first");
        // Second card centered at (520, 420).
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(520.0, 420.0));
        engine.submit_text("second".to_string());

        // Connect button of card 0.
        engine.pointer_moved(Point::new(120.0, 180.0), ButtonMask::NONE);
        let outcome = engine.pointer_pressed(Point::new(120.0, 180.0));
        assert_eq!(outcome, PressOutcome::ConnectionStarted(0));
        assert_eq!(engine.mode(), Mode::PendingConnection { source: 0 });

        // Connect button of card 1 completes the edge on card 1.
        engine.pointer_moved(Point::new(430.0, 460.0), ButtonMask::NONE);
        let outcome = engine.pointer_pressed(Point::new(430.0, 460.0));
        assert_eq!(outcome, PressOutcome::ConnectionCompleted { source: 1, dest: 0 });
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.store().card(1).links, vec![0]);
        assert!(engine.store().card(0).links.is_empty());
    }

    #[test]
    fn test_connect_same_card_twice_resolves_without_link() {
        let mut engine = engine_with_card(100.0, 100.0, "first");
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(520.0, 420.0));
        engine.submit_text("second".to_string());

        engine.pointer_moved(Point::new(120.0, 180.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(120.0, 180.0));
        let outcome = engine.pointer_pressed(Point::new(120.0, 180.0));

        // The self-link is swallowed by the store but the pending state
        // still resolves.
        assert_eq!(outcome, PressOutcome::ConnectionCompleted { source: 0, dest: 0 });
        assert_eq!(engine.mode(), Mode::Idle);
        assert!(engine.store().card(0).links.is_empty());
    }

    #[test]
    fn test_body_drag_translates_card() {
        let mut engine = engine_with_card(100.0, 100.0, "drag");

        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(170.0, 190.0), ButtonMask::PRIMARY);

        let card = engine.store().card(0);
        assert_eq!(card.position, Point::new(120.0, 140.0));
        assert!((card.width - 200.0).abs() < f64::EPSILON);
        assert!((card.height - 100.0).abs() < f64::EPSILON);
        // Text rides along with the move.
        assert_eq!(card.text.as_deref(), Some("drag"));
    }

    #[test]
    fn test_expand_drag_resizes_from_top_left() {
        let mut engine = engine_with_card(100.0, 100.0, "grow");

        // Expand button of the card at (100, 100, 200, 100).
        engine.pointer_moved(Point::new(280.0, 180.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(280.0, 180.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(330.0, 210.0), ButtonMask::PRIMARY);

        let card = engine.store().card(0);
        assert_eq!(card.position, Point::new(100.0, 100.0));
        assert!((card.width - 250.0).abs() < f64::EPSILON);
        assert!((card.height - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_clamps_to_minimums() {
        let mut engine = engine_with_card(100.0, 100.0, "small");

        engine.pointer_moved(Point::new(280.0, 180.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(280.0, 180.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(-500.0, -500.0), ButtonMask::PRIMARY);

        let card = engine.store().card(0);
        assert!((card.width - 90.0).abs() < f64::EPSILON);
        assert!((card.height - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_keeps_links() {
        let mut engine = engine_with_card(100.0, 100.0, "first");
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(520.0, 420.0));
        engine.submit_text("second".to_string());

        engine.pointer_moved(Point::new(120.0, 180.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(120.0, 180.0));
        engine.pointer_moved(Point::new(430.0, 460.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(430.0, 460.0));

        // Drag card 1 and check its link survives the rebuild.
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(560.0, 400.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(560.0, 400.0), ButtonMask::NONE);

        let card = engine.store().card(1);
        assert_eq!(card.position, Point::new(460.0, 350.0));
        assert_eq!(card.links, vec![0]);
    }

    #[test]
    fn test_focus_is_stable_for_the_whole_drag() {
        let mut engine = engine_with_card(100.0, 100.0, "a");
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(520.0, 420.0));
        engine.submit_text("b".to_string());

        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::NONE);
        assert_eq!(engine.focus().card, Some(0));

        // Held moves across the second card keep card 0 focused.
        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(500.0, 400.0), ButtonMask::PRIMARY);
        assert_eq!(engine.focus().card, Some(0));

        // Release: focus is re-resolved at the pointer.
        engine.pointer_moved(Point::new(500.0, 400.0), ButtonMask::NONE);
        assert_eq!(engine.focus().card, Some(1));
    }

    #[test]
    fn test_release_ends_session_without_moving_further() {
        let mut engine = engine_with_card(100.0, 100.0, "stop");

        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(170.0, 190.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(400.0, 400.0), ButtonMask::NONE);

        // The unheld move discarded the session instead of applying its
        // delta.
        assert_eq!(engine.store().card(0).position, Point::new(120.0, 140.0));
    }

    #[test]
    fn test_chorded_buttons_do_not_drag() {
        let mut engine = engine_with_card(100.0, 100.0, "chord");

        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(150.0, 150.0), ButtonMask(3));
        engine.pointer_moved(Point::new(170.0, 190.0), ButtonMask(3));

        assert_eq!(engine.store().card(0).position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_held_show_more_is_inert_but_pins_focus() {
        let mut engine = engine_with_card(100.0, 100.0, "pin");

        engine.pointer_moved(Point::new(280.0, 120.0), ButtonMask::NONE);
        engine.pointer_moved(Point::new(280.0, 120.0), ButtonMask::PRIMARY);
        engine.pointer_moved(Point::new(400.0, 400.0), ButtonMask::PRIMARY);

        // No geometry change, and the focused button is still show-more.
        assert_eq!(engine.store().card(0).position, Point::new(100.0, 100.0));
        assert_eq!(engine.focus().button, Some(CardButton::ShowMore));
    }

    #[test]
    fn test_revision_tracks_store_mutations() {
        let mut engine = Engine::default();
        let start = engine.revision();

        engine.pointer_moved(Point::new(200.0, 150.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(200.0, 150.0));
        assert_eq!(engine.revision(), start + 1);

        engine.submit_text("tick".to_string());
        assert_eq!(engine.revision(), start + 2);

        // A plain hover changes nothing.
        engine.pointer_moved(Point::new(5.0, 5.0), ButtonMask::NONE);
        assert_eq!(engine.revision(), start + 2);
    }

    #[test]
    fn test_pending_connection_dropped_by_card_creation() {
        let mut engine = engine_with_card(100.0, 100.0, "first");
        engine.pointer_moved(Point::new(520.0, 420.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(520.0, 420.0));
        engine.submit_text("second".to_string());

        engine.pointer_moved(Point::new(120.0, 180.0), ButtonMask::NONE);
        let _ = engine.pointer_pressed(Point::new(120.0, 180.0));
        assert_eq!(engine.mode(), Mode::PendingConnection { source: 0 });

        // Pressing empty surface starts a new card; the pending source is
        // gone with the mode change.
        engine.pointer_moved(Point::new(900.0, 700.0), ButtonMask::NONE);
        let outcome = engine.pointer_pressed(Point::new(900.0, 700.0));
        assert_eq!(outcome, PressOutcome::CardCreated(2));
        assert_eq!(engine.mode(), Mode::AwaitingText { card: 2 });
    }

    #[test]
    fn test_cursor_hints() {
        let mut engine = engine_with_card(100.0, 100.0, "cue");

        engine.pointer_moved(Point::new(5.0, 5.0), ButtonMask::NONE);
        assert_eq!(engine.cursor_hint(), CursorHint::Default);

        engine.pointer_moved(Point::new(150.0, 130.0), ButtonMask::NONE);
        assert_eq!(engine.cursor_hint(), CursorHint::Grab);

        engine.pointer_moved(Point::new(280.0, 180.0), ButtonMask::NONE);
        assert_eq!(engine.cursor_hint(), CursorHint::Expand);

        engine.pointer_moved(Point::new(120.0, 180.0), ButtonMask::NONE);
        assert_eq!(engine.cursor_hint(), CursorHint::Connect);
    }
}
