//! Scene building: one pass over the card store per change.

use crate::surface::{Surface, SurfaceError};
use cardlink_core::{compute_path, Engine};
use kurbo::{Point, Size};
use peniko::Color;

/// Colors used when painting the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Card and button outlines.
    pub stroke: Color,
    /// Label text.
    pub text: Color,
    /// Connector polylines.
    pub connector: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            stroke: Color::from_rgba8(30, 30, 30, 255),
            text: Color::from_rgba8(30, 30, 30, 255),
            connector: Color::from_rgba8(90, 90, 90, 255),
        }
    }
}

/// Context for a single scene build.
pub struct SceneContext<'a> {
    /// The engine whose store is painted.
    pub engine: &'a Engine,
    /// Viewport size the surface is cleared to.
    pub viewport: Size,
    /// Scene colors.
    pub theme: Theme,
}

impl<'a> SceneContext<'a> {
    /// Create a context with the default theme.
    pub fn new(engine: &'a Engine, viewport: Size) -> Self {
        Self {
            engine,
            viewport,
            theme: Theme::default(),
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Paint every card, its buttons, and its connectors onto the surface.
///
/// Per card in store order: the frame; then, only once the card has text,
/// its label and the three button frames (a frame without a label is still
/// waiting on its overlay); then one polyline per link entry `v`, routed
/// from `store[v]` into this card.
pub fn build_scene(surface: &mut dyn Surface, ctx: &SceneContext<'_>) -> Result<(), SurfaceError> {
    let cfg = ctx.engine.config();
    let store = ctx.engine.store();
    let theme = &ctx.theme;

    surface.clear(ctx.viewport);

    for card in store.cards() {
        surface.rounded_rect(card.frame(), cfg.corner_radius, theme.stroke);

        if card.text.is_some() {
            let origin = Point::new(
                card.position.x + cfg.text_padding,
                card.position.y + cfg.text_size + cfg.text_padding,
            );
            surface.text(origin, cfg.text_size, &card.label(cfg), theme.text);

            surface.rounded_rect(card.show_more_button, cfg.corner_radius, theme.stroke);
            surface.rounded_rect(card.expand_button, cfg.corner_radius, theme.stroke);
            surface.rounded_rect(card.connect_button, cfg.corner_radius, theme.stroke);
        }

        for &source in &card.links {
            let path = compute_path(store.card(source), card);
            surface.polyline(&path, theme.connector);
        }
    }

    surface.present()
}
