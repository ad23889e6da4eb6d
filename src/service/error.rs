use thiserror::Error;

use crate::switch::{PortId, PortRole};

/// Recoverable failures returned by switch service calls.
///
/// Neither variant mutates the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A port id outside `1..=max` for its role.
    #[error("Invalid {role} port {port} (valid range 1-{max})")]
    InvalidPort {
        role: PortRole,
        port: PortId,
        max: u32,
    },

    /// The backend refused or failed to carry out the command.
    #[error("Switch fault: {message}")]
    Fault { message: String },
}

impl ServiceError {
    /// Short title for operator-facing popups.
    pub fn title(&self) -> &'static str {
        match self {
            ServiceError::InvalidPort { .. } => "Invalid Port",
            ServiceError::Fault { .. } => "Server Error",
        }
    }
}
