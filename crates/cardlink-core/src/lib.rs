//! Cardlink Core Library
//!
//! Platform-agnostic geometry and interaction engine for the Cardlink
//! card-diagram editor.

pub mod card;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod route;
pub mod status;
pub mod store;

pub use card::{display_label, merge, Card};
pub use config::CardConfig;
pub use engine::{ButtonMask, CursorHint, DragKind, Engine, Mode, PressOutcome};
pub use geometry::{contains_point, edge_midpoint, edge_points, Side};
pub use hit::{hit_test, CardButton, Focus};
pub use route::compute_path;
pub use status::status_text;
pub use store::CardStore;
