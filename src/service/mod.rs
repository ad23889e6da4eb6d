//! Switch service boundary.
//!
//! Validated, latent, fallible operations over the pairing registry, plus the
//! dispatcher that carries them between the UI thread and the async runtime.

mod api;
mod dispatch;
mod error;
mod state;

pub use api::{SwitchApi, SwitchCommand};
pub use dispatch::{execute, CommandSink, Completion, ServiceDispatcher};
pub use error::ServiceError;
pub use state::{CommandLogEntry, ServiceOptions, SwitchService};
