//! Configuration loading and startup validation.

mod loader;
mod types;

pub use loader::{validate_layout, ConfigError};
pub use types::{Config, SwitchSettings, UiSettings};
