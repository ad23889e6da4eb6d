use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::service::ServiceOptions;
use crate::switch::PortPair;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub switch: SwitchSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Simulated switch hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSettings {
    /// Number of ingress ports (default: 32).
    #[serde(default = "default_num_ingress")]
    pub num_ingress: u32,
    /// Number of egress ports (default: 64).
    #[serde(default = "default_num_egress")]
    pub num_egress: u32,
    /// Simulated round trip per command in milliseconds (default: 1500).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Pairings present at startup.
    #[serde(default = "default_seed")]
    pub seed: Vec<PortPair>,
    /// Connecting exactly this pair fails, for exercising error handling.
    #[serde(default = "default_fault_trigger")]
    pub fault_trigger: Option<PortPair>,
    /// When false, `fault_trigger` is ignored (default: true).
    #[serde(default = "default_fault_injection")]
    pub fault_injection: bool,
}

/// Terminal control surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Ports per grid row; both port counts must be multiples of it (default: 8).
    #[serde(default = "default_layout_width")]
    pub layout_width: u32,
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_num_ingress() -> u32 {
    32
}

fn default_num_egress() -> u32 {
    64
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_seed() -> Vec<PortPair> {
    vec![
        PortPair::new(2, 5),
        PortPair::new(12, 15),
        PortPair::new(22, 25),
        PortPair::new(32, 35),
    ]
}

fn default_fault_trigger() -> Option<PortPair> {
    Some(PortPair::new(4, 20))
}

fn default_fault_injection() -> bool {
    true
}

fn default_layout_width() -> u32 {
    8
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for SwitchSettings {
    fn default() -> Self {
        Self {
            num_ingress: default_num_ingress(),
            num_egress: default_num_egress(),
            latency_ms: default_latency_ms(),
            seed: default_seed(),
            fault_trigger: default_fault_trigger(),
            fault_injection: default_fault_injection(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            layout_width: default_layout_width(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl SwitchSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// The trigger in effect, if fault injection is enabled.
    pub fn active_fault_trigger(&self) -> Option<PortPair> {
        self.fault_trigger.filter(|_| self.fault_injection)
    }

    /// Options for constructing the switch service.
    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            num_ingress: self.num_ingress,
            num_egress: self.num_egress,
            seed: self.seed.clone(),
            latency: self.latency(),
            fault_trigger: self.active_fault_trigger(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
