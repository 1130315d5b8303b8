//! Recording surface for tests and headless runs.

use crate::surface::{Surface, SurfaceError};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::Serialize;

/// One recorded drawing operation.
///
/// Geometry only; color is presentation the recorder does not need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
    },
    RoundedRect {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        radius: f64,
    },
    Text {
        x: f64,
        y: f64,
        size: f64,
        text: String,
    },
    Polyline {
        points: Vec<(f64, f64)>,
    },
}

/// A surface that records draw calls instead of painting them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayList {
    commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded for the latest frame.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, viewport: Size) {
        // A frame starts from scratch.
        self.commands.clear();
        self.commands.push(DrawCmd::Clear {
            width: viewport.width,
            height: viewport.height,
        });
    }

    fn rounded_rect(&mut self, rect: Rect, radius: f64, _color: Color) {
        self.commands.push(DrawCmd::RoundedRect {
            left: rect.x0,
            top: rect.y0,
            width: rect.width(),
            height: rect.height(),
            radius,
        });
    }

    fn text(&mut self, origin: Point, size: f64, text: &str, _color: Color) {
        self.commands.push(DrawCmd::Text {
            x: origin.x,
            y: origin.y,
            size,
            text: text.to_string(),
        });
    }

    fn polyline(&mut self, points: &[Point], _color: Color) {
        self.commands.push(DrawCmd::Polyline {
            points: points.iter().map(|p| (p.x, p.y)).collect(),
        });
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }
}
