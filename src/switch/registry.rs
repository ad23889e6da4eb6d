//! Canonical one-to-one pairing between ingress and egress ports.
//!
//! Both directions live inside [`Pairing`] and are only ever written together,
//! so the forward and inverse maps cannot drift apart. Range checks are the
//! service's job; nothing here knows how many ports exist.

use serde::Serialize;
use std::collections::BTreeMap;

use super::types::{PortId, PortPair, PortRole};

/// Injective ingress → egress mapping plus its inverse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "Vec<PortPair>")]
pub struct Pairing {
    forward: BTreeMap<PortId, PortId>,
    inverse: BTreeMap<PortId, PortId>,
}

impl Pairing {
    pub fn egress_for(&self, ingress: PortId) -> Option<PortId> {
        self.forward.get(&ingress).copied()
    }

    pub fn ingress_for(&self, egress: PortId) -> Option<PortId> {
        self.inverse.get(&egress).copied()
    }

    /// Partner of `id` where `id` is a port of `role`.
    pub fn partner(&self, role: PortRole, id: PortId) -> Option<PortId> {
        match role {
            PortRole::Ingress => self.egress_for(id),
            PortRole::Egress => self.ingress_for(id),
        }
    }

    /// True when `ingress` is currently connected to `egress`.
    pub fn are_paired(&self, ingress: PortId, egress: PortId) -> bool {
        self.egress_for(ingress) == Some(egress)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Pairs in ascending ingress order.
    pub fn iter(&self) -> impl Iterator<Item = PortPair> + '_ {
        self.forward
            .iter()
            .map(|(&ingress, &egress)| PortPair::new(ingress, egress))
    }

    fn insert(&mut self, ingress: PortId, egress: PortId) {
        if let Some(old_egress) = self.forward.remove(&ingress) {
            self.inverse.remove(&old_egress);
        }
        if let Some(old_ingress) = self.inverse.remove(&egress) {
            self.forward.remove(&old_ingress);
        }
        self.forward.insert(ingress, egress);
        self.inverse.insert(egress, ingress);
    }

    fn remove_ingress(&mut self, ingress: PortId) -> Option<PortId> {
        let egress = self.forward.remove(&ingress)?;
        self.inverse.remove(&egress);
        Some(egress)
    }

    fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }
}

impl From<Pairing> for Vec<PortPair> {
    fn from(pairing: Pairing) -> Self {
        pairing.iter().collect()
    }
}

/// Mutable owner of the live pairing.
#[derive(Debug, Clone, Default)]
pub struct PortPairingRegistry {
    pairing: Pairing,
}

impl PortPairingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed pairs, applied in order with `set` semantics.
    pub fn with_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = PortPair>,
    {
        let mut registry = Self::new();
        for pair in seed {
            registry.set(pair.ingress, pair.egress);
        }
        registry
    }

    /// Connect `ingress` to `egress`, first breaking any pairing that
    /// involves either port.
    pub fn set(&mut self, ingress: PortId, egress: PortId) {
        self.pairing.insert(ingress, egress);
    }

    /// Drop the pairing containing `ingress`. Returns the egress it was
    /// connected to; unpaired ingress is a no-op.
    pub fn clear(&mut self, ingress: PortId) -> Option<PortId> {
        self.pairing.remove_ingress(ingress)
    }

    pub fn clear_all(&mut self) {
        self.pairing.clear();
    }

    /// Read-only view of the live pairing.
    pub fn pairing(&self) -> &Pairing {
        &self.pairing
    }

    pub fn snapshot(&self) -> Pairing {
        self.pairing.clone()
    }
}
