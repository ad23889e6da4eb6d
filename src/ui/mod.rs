//! Terminal control surface.
//!
//! Everything here is presentation except [`selection`], which holds the
//! selection state machine the view renders.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod terminal_guard;
pub mod theme;
