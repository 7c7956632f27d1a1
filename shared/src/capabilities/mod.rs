//! Effects the core can request from the shell.
//!
//! The core does no I/O; a redraw is the only effect.
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
}
