//! Headless demo entry point.
//!
//! Runs a scripted editing session against the recording surface and dumps
//! the resulting display list, standing in for a windowing host.

use cardlink_app::{App, HostEvent, Shell};
use cardlink_core::{ButtonMask, CardConfig, CursorHint};
use cardlink_render::DisplayList;
use kurbo::Point;

/// Shell that narrates collaborator calls on stdout.
struct StdoutShell;

impl Shell for StdoutShell {
    fn warn(&mut self, message: &str) {
        println!("!! {message}");
    }

    fn open_text_entry(&mut self, anchor: Point) {
        println!("text entry at ({}, {})", anchor.x, anchor.y);
    }

    fn open_info(&mut self, anchor: Point, text: &str) {
        println!("info at ({}, {}): {text}", anchor.x, anchor.y);
    }

    fn set_status(&mut self, text: &str) {
        println!("-- {text}");
    }

    fn set_cursor(&mut self, _hint: CursorHint) {
        // No pointer to style in a headless run.
    }
}

fn main() {
    env_logger::init();
    log::info!("starting cardlink demo");

    let mut app = App::new(CardConfig::default(), DisplayList::new());
    let mut shell = StdoutShell;

    let script = [
        HostEvent::Resized {
            width: 1280.0,
            height: 720.0,
        },
        // Two titled cards.
        HostEvent::PointerMoved {
            x: 200.0,
            y: 150.0,
            buttons: ButtonMask::NONE,
        },
        HostEvent::PointerPressed { x: 200.0, y: 150.0 },
        HostEvent::TextSubmitted("Research".to_string()),
        HostEvent::PointerMoved {
            x: 520.0,
            y: 420.0,
            buttons: ButtonMask::NONE,
        },
        HostEvent::PointerPressed { x: 520.0, y: 420.0 },
        HostEvent::TextSubmitted("Write-up".to_string()),
        // Link them: connect button of the first card, then the second.
        HostEvent::PointerMoved {
            x: 110.0,
            y: 190.0,
            buttons: ButtonMask::NONE,
        },
        HostEvent::PointerPressed { x: 110.0, y: 190.0 },
        HostEvent::PointerMoved {
            x: 430.0,
            y: 460.0,
            buttons: ButtonMask::NONE,
        },
        HostEvent::PointerPressed { x: 430.0, y: 460.0 },
        // Drag the second card a little.
        HostEvent::PointerMoved {
            x: 520.0,
            y: 420.0,
            buttons: ButtonMask::NONE,
        },
        HostEvent::PointerMoved {
            x: 520.0,
            y: 420.0,
            buttons: ButtonMask::PRIMARY,
        },
        HostEvent::PointerMoved {
            x: 560.0,
            y: 400.0,
            buttons: ButtonMask::PRIMARY,
        },
        HostEvent::PointerMoved {
            x: 560.0,
            y: 400.0,
            buttons: ButtonMask::NONE,
        },
    ];

    for event in script {
        if let Err(err) = app.handle_event(&mut shell, event) {
            log::error!("render failed: {err}");
            return;
        }
    }

    let edges: Vec<_> = app.engine().store().edges().collect();
    log::info!("drawn edges (source -> dest): {edges:?}");

    match serde_json::to_string_pretty(app.surface()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to encode display list: {err}"),
    }
}
