//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use portswitch::service::{CommandSink, ServiceOptions, SwitchCommand, SwitchService};
use portswitch::switch::{PortId, PortPair, PortPairingRegistry, SwitchConfiguration};
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Seed pairing used by the default switch: {2->5, 12->15, 22->25, 32->35}.
pub const DEFAULT_SEED: [(PortId, PortId); 4] = [(2, 5), (12, 15), (22, 25), (32, 35)];

/// Default 32x64 service with no latency.
pub fn default_service() -> SwitchService {
    SwitchService::new(ServiceOptions::default()).expect("default service")
}

/// Default service with a simulated round trip.
pub fn latent_service(latency: Duration) -> SwitchService {
    SwitchService::new(ServiceOptions {
        latency,
        ..ServiceOptions::default()
    })
    .expect("latent service")
}

/// Configuration as the default service reports it at startup.
pub fn default_view() -> SwitchConfiguration {
    view(32, 64, &DEFAULT_SEED)
}

pub fn view(num_ingress: u32, num_egress: u32, pairs: &[(PortId, PortId)]) -> SwitchConfiguration {
    let registry =
        PortPairingRegistry::with_seed(pairs.iter().map(|&(i, e)| PortPair::new(i, e)));
    SwitchConfiguration::new(num_ingress, num_egress, registry.snapshot())
}

/// Sink that records commands instead of executing them.
#[derive(Default)]
pub struct RecordingSink {
    pub submitted: RefCell<Vec<SwitchCommand>>,
}

impl RecordingSink {
    pub fn commands(&self) -> Vec<SwitchCommand> {
        self.submitted.borrow().clone()
    }
}

impl CommandSink for RecordingSink {
    fn submit(&self, command: SwitchCommand) {
        self.submitted.borrow_mut().push(command);
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
