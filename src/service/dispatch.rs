//! Runs switch commands off the UI thread and hands results back.
//!
//! The UI thread owns all selection state. Commands are spawned on the tokio
//! runtime; each finished call comes back as one [`Completion`] over a std
//! mpsc channel that the UI loop drains before touching any state.

use std::sync::mpsc;

use tokio::runtime::Handle;

use crate::service::api::{SwitchApi, SwitchCommand};
use crate::service::error::ServiceError;
use crate::switch::SwitchConfiguration;

/// Result of one finished service call.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub command: SwitchCommand,
    pub outcome: Result<SwitchConfiguration, ServiceError>,
    /// Configuration as of completion. Equal to the `Ok` value on success;
    /// re-read from the service after a failure.
    pub snapshot: SwitchConfiguration,
}

impl Completion {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Where the controller sends commands it wants executed.
pub trait CommandSink {
    fn submit(&self, command: SwitchCommand);
}

/// Execute `command` against `service` and package the result.
pub async fn execute<S: SwitchApi>(service: &S, command: SwitchCommand) -> Completion {
    let outcome = match command {
        SwitchCommand::Connect { ingress, egress } => service.connect(ingress, egress).await,
        SwitchCommand::Disconnect { ingress } => service.disconnect(ingress).await,
        SwitchCommand::DisconnectAll => Ok(service.disconnect_all().await),
    };

    let snapshot = match &outcome {
        Ok(config) => config.clone(),
        Err(_) => service.get_configuration().await,
    };

    Completion {
        command,
        outcome,
        snapshot,
    }
}

/// [`CommandSink`] that spawns each command on a tokio runtime and posts the
/// [`Completion`] into the UI event queue.
pub struct ServiceDispatcher<S, E> {
    service: S,
    runtime: Handle,
    completions: mpsc::Sender<E>,
}

impl<S, E> ServiceDispatcher<S, E>
where
    S: SwitchApi,
    E: From<Completion> + Send + 'static,
{
    pub fn new(service: S, runtime: Handle, completions: mpsc::Sender<E>) -> Self {
        Self {
            service,
            runtime,
            completions,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S, E> CommandSink for ServiceDispatcher<S, E>
where
    S: SwitchApi,
    E: From<Completion> + Send + 'static,
{
    fn submit(&self, command: SwitchCommand) {
        let service = self.service.clone();
        let completions = self.completions.clone();
        tracing::debug!(%command, "Dispatching switch command");

        self.runtime.spawn(async move {
            let completion = execute(&service, command).await;
            if completions.send(E::from(completion)).is_err() {
                tracing::trace!(%command, "Completion dropped (receiver gone)");
            }
        });
    }
}
