//! Cardlink Render Library
//!
//! Drawing-surface abstraction for Cardlink. Painting backends implement
//! `Surface`; the scene builder walks the card store once per change.

mod display_list;
mod scene;
mod surface;

pub use display_list::{DisplayList, DrawCmd};
pub use scene::{build_scene, SceneContext, Theme};
pub use surface::{Surface, SurfaceError};
