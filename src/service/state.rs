//! In-process switch simulator.
//!
//! Wraps a [`PortPairingRegistry`] with range validation, an injectable
//! round-trip latency, and a fault-injection trigger used to exercise error
//! handling. The handle is cheap to clone; clones share the same registry.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::service::api::{SwitchApi, SwitchCommand};
use crate::service::error::ServiceError;
use crate::switch::{PortId, PortPair, PortPairingRegistry, PortRole, SwitchConfiguration};

/// Construction parameters for [`SwitchService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    pub num_ingress: u32,
    pub num_egress: u32,
    /// Pairings present when the service starts.
    pub seed: Vec<PortPair>,
    /// Simulated round trip applied to every mutating call.
    pub latency: Duration,
    /// Connecting exactly this pair fails with [`ServiceError::Fault`].
    pub fault_trigger: Option<PortPair>,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            num_ingress: 32,
            num_egress: 64,
            seed: vec![
                PortPair::new(2, 5),
                PortPair::new(12, 15),
                PortPair::new(22, 25),
                PortPair::new(32, 35),
            ],
            latency: Duration::ZERO,
            fault_trigger: Some(PortPair::new(4, 20)),
        }
    }
}

/// Audit record for a command the service processed.
#[derive(Debug, Clone)]
pub struct CommandLogEntry {
    pub timestamp: SystemTime,
    pub command: SwitchCommand,
    pub outcome: Result<(), ServiceError>,
}

/// Thread-safe simulated switch.
#[derive(Clone)]
pub struct SwitchService {
    inner: Arc<RwLock<ServiceInner>>,
    latency: Duration,
    fault_trigger: Option<PortPair>,
}

struct ServiceInner {
    num_ingress: u32,
    num_egress: u32,
    registry: PortPairingRegistry,
    command_log: Vec<CommandLogEntry>,
}

impl ServiceInner {
    fn snapshot(&self) -> SwitchConfiguration {
        SwitchConfiguration::new(self.num_ingress, self.num_egress, self.registry.snapshot())
    }

    fn check_port(&self, role: PortRole, port: PortId) -> Result<(), ServiceError> {
        let max = match role {
            PortRole::Ingress => self.num_ingress,
            PortRole::Egress => self.num_egress,
        };
        if port < 1 || port > max {
            return Err(ServiceError::InvalidPort { role, port, max });
        }
        Ok(())
    }

    fn record(&mut self, command: SwitchCommand, outcome: Result<(), ServiceError>) {
        self.command_log.push(CommandLogEntry {
            timestamp: SystemTime::now(),
            command,
            outcome,
        });
    }
}

impl SwitchService {
    /// Create a service owning a fresh registry seeded from `options`.
    ///
    /// # Errors
    /// Returns [`ServiceError::InvalidPort`] if a seed pair is out of range.
    pub fn new(options: ServiceOptions) -> Result<Self, ServiceError> {
        let mut inner = ServiceInner {
            num_ingress: options.num_ingress,
            num_egress: options.num_egress,
            registry: PortPairingRegistry::new(),
            command_log: Vec::new(),
        };

        for pair in &options.seed {
            inner.check_port(PortRole::Ingress, pair.ingress)?;
            inner.check_port(PortRole::Egress, pair.egress)?;
            inner.registry.set(pair.ingress, pair.egress);
        }

        tracing::info!(
            num_ingress = options.num_ingress,
            num_egress = options.num_egress,
            seeded = inner.registry.pairing().len(),
            latency_ms = options.latency.as_millis() as u64,
            "Switch service started"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(inner)),
            latency: options.latency,
            fault_trigger: options.fault_trigger,
        })
    }

    /// Current configuration without going through the async boundary.
    pub fn snapshot(&self) -> SwitchConfiguration {
        self.inner.read().snapshot()
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Commands processed so far, oldest first.
    pub fn command_log(&self) -> Vec<CommandLogEntry> {
        self.inner.read().command_log.clone()
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn validate(
        &self,
        command: SwitchCommand,
        ports: &[(PortRole, PortId)],
    ) -> Result<(), ServiceError> {
        let mut inner = self.inner.write();
        for &(role, port) in ports {
            if let Err(err) = inner.check_port(role, port) {
                tracing::warn!(%command, error = %err, "Rejected switch command");
                inner.record(command, Err(err.clone()));
                return Err(err);
            }
        }
        Ok(())
    }

    fn apply<F>(&self, command: SwitchCommand, mutate: F) -> SwitchConfiguration
    where
        F: FnOnce(&mut PortPairingRegistry),
    {
        let mut inner = self.inner.write();
        mutate(&mut inner.registry);
        inner.record(command, Ok(()));
        inner.snapshot()
    }

    fn fail(&self, command: SwitchCommand, err: ServiceError) -> ServiceError {
        tracing::error!(%command, error = %err, "Switch command failed");
        self.inner.write().record(command, Err(err.clone()));
        err
    }
}

impl SwitchApi for SwitchService {
    async fn get_configuration(&self) -> SwitchConfiguration {
        self.snapshot()
    }

    async fn connect(
        &self,
        ingress: PortId,
        egress: PortId,
    ) -> Result<SwitchConfiguration, ServiceError> {
        let command = SwitchCommand::Connect { ingress, egress };
        self.validate(
            command,
            &[(PortRole::Ingress, ingress), (PortRole::Egress, egress)],
        )?;

        tracing::info!(ingress, egress, "Connecting");
        self.simulate_round_trip().await;

        if self.fault_trigger == Some(PortPair::new(ingress, egress)) {
            return Err(self.fail(
                command,
                ServiceError::Fault {
                    message: format!("switch did not acknowledge {}", command),
                },
            ));
        }

        Ok(self.apply(command, |registry| registry.set(ingress, egress)))
    }

    async fn disconnect(&self, ingress: PortId) -> Result<SwitchConfiguration, ServiceError> {
        let command = SwitchCommand::Disconnect { ingress };
        self.validate(command, &[(PortRole::Ingress, ingress)])?;

        tracing::info!(ingress, "Disconnecting");
        self.simulate_round_trip().await;

        Ok(self.apply(command, |registry| {
            if let Some(egress) = registry.clear(ingress) {
                tracing::debug!(ingress, egress, "Pairing removed");
            }
        }))
    }

    async fn disconnect_all(&self) -> SwitchConfiguration {
        let command = SwitchCommand::DisconnectAll;
        tracing::info!("Disconnecting all");
        self.simulate_round_trip().await;

        self.apply(command, PortPairingRegistry::clear_all)
    }
}
