//! Application shell: event arbitration and redraw scheduling.

use crate::event::HostEvent;
use crate::shell::Shell;
use cardlink_core::{status_text, CardConfig, CursorHint, Engine, PressOutcome};
use cardlink_render::{build_scene, SceneContext, Surface, SurfaceError, Theme};
use kurbo::{Point, Size};

/// Warning shown when connecting with fewer than two cards.
pub const CONNECT_WARNING: &str = "can not connect when there is only 1 card";

/// Owns the engine and a painting surface, and drives exactly one redraw
/// per store revision.
pub struct App<S: Surface> {
    engine: Engine,
    surface: S,
    viewport: Size,
    theme: Theme,
    painted_revision: Option<u64>,
}

impl<S: Surface> App<S> {
    pub fn new(config: CardConfig, surface: S) -> Self {
        Self {
            engine: Engine::new(config),
            surface,
            viewport: Size::new(800.0, 600.0),
            theme: Theme::default(),
            painted_revision: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Feed one host event, then settle: repaint if the store changed and
    /// refresh the status line before the next event is processed.
    pub fn handle_event(
        &mut self,
        shell: &mut dyn Shell,
        event: HostEvent,
    ) -> Result<(), SurfaceError> {
        match event {
            HostEvent::PointerMoved { x, y, buttons } => {
                self.engine.pointer_moved(Point::new(x, y), buttons);
            }
            HostEvent::PointerPressed { x, y } => {
                match self.engine.pointer_pressed(Point::new(x, y)) {
                    PressOutcome::CardCreated(index) => {
                        let card = self.engine.store().card(index);
                        shell.open_text_entry(card.position);
                    }
                    PressOutcome::InfoOpened(index) => {
                        let card = self.engine.store().card(index);
                        let anchor = Point::new(card.position.x + card.width, card.position.y);
                        shell.open_info(anchor, card.text.as_deref().unwrap_or(""));
                    }
                    PressOutcome::ConnectionRefused => shell.warn(CONNECT_WARNING),
                    PressOutcome::ConnectionStarted(_)
                    | PressOutcome::ConnectionCompleted { .. }
                    | PressOutcome::None => {}
                }
            }
            HostEvent::TextSubmitted(text) => self.engine.submit_text(text),
            HostEvent::InfoClosed => self.engine.close_info(),
            HostEvent::Resized { width, height } => {
                self.viewport = Size::new(width, height);
                // The next settle repaints at the new size.
                self.painted_revision = None;
            }
        }

        self.settle(shell)
    }

    fn settle(&mut self, shell: &mut dyn Shell) -> Result<(), SurfaceError> {
        if self.painted_revision != Some(self.engine.revision()) {
            let ctx = SceneContext::new(&self.engine, self.viewport).with_theme(self.theme);
            build_scene(&mut self.surface, &ctx)?;
            self.painted_revision = Some(self.engine.revision());
        }
        shell.set_status(&status_text(&self.engine));
        shell.set_cursor(self.engine.cursor_hint());
        Ok(())
    }
}
