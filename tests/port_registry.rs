mod common;

use portswitch::switch::{PortPair, PortPairingRegistry, PortRole};

fn assert_mirrored(registry: &PortPairingRegistry) {
    let pairing = registry.pairing();
    for pair in pairing.iter() {
        assert_eq!(pairing.egress_for(pair.ingress), Some(pair.egress));
        assert_eq!(pairing.ingress_for(pair.egress), Some(pair.ingress));
    }
}

#[test]
fn test_seed_is_loaded() {
    let registry = PortPairingRegistry::with_seed(
        common::DEFAULT_SEED
            .iter()
            .map(|&(i, e)| PortPair::new(i, e)),
    );
    assert_eq!(registry.pairing().len(), 4);
    assert_eq!(registry.pairing().egress_for(12), Some(15));
    assert_eq!(registry.pairing().ingress_for(35), Some(32));
    assert_mirrored(&registry);
}

#[test]
fn test_set_steals_both_endpoints() {
    let mut registry = PortPairingRegistry::new();
    registry.set(1, 10);
    registry.set(2, 20);

    // 1 moves to 20; 2 loses its egress, 10 loses its ingress.
    registry.set(1, 20);

    let pairing = registry.pairing();
    assert_eq!(pairing.len(), 1);
    assert_eq!(pairing.egress_for(1), Some(20));
    assert_eq!(pairing.egress_for(2), None);
    assert_eq!(pairing.ingress_for(10), None);
    assert_mirrored(&registry);
}

#[test]
fn test_set_existing_pair_is_noop() {
    let mut registry = PortPairingRegistry::with_seed([PortPair::new(3, 4)]);
    let before = registry.snapshot();
    registry.set(3, 4);
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn test_clear_is_idempotent() {
    let mut registry = PortPairingRegistry::with_seed([PortPair::new(3, 4)]);
    assert_eq!(registry.clear(3), Some(4));
    assert_eq!(registry.clear(3), None);
    assert!(registry.pairing().is_empty());
    assert_eq!(registry.pairing().ingress_for(4), None);
}

#[test]
fn test_clear_all_empties_pairing() {
    let mut registry = PortPairingRegistry::with_seed([PortPair::new(1, 1), PortPair::new(2, 2)]);
    registry.clear_all();
    assert!(registry.pairing().is_empty());
    registry.clear_all();
    assert!(registry.pairing().is_empty());
}

#[test]
fn test_snapshot_is_detached() {
    let mut registry = PortPairingRegistry::with_seed([PortPair::new(1, 2)]);
    let snapshot = registry.snapshot();
    registry.clear_all();
    registry.set(5, 6);

    assert!(snapshot.are_paired(1, 2));
    assert!(!snapshot.are_paired(5, 6));
}

#[test]
fn test_partner_by_role() {
    let registry = PortPairingRegistry::with_seed([PortPair::new(7, 9)]);
    let pairing = registry.pairing();
    assert_eq!(pairing.partner(PortRole::Ingress, 7), Some(9));
    assert_eq!(pairing.partner(PortRole::Egress, 9), Some(7));
    assert_eq!(pairing.partner(PortRole::Egress, 7), None);
}

#[test]
fn test_injectivity_under_random_walk() {
    let mut registry = PortPairingRegistry::new();
    // Deterministic pseudo-random walk over a small port space.
    let mut x: u32 = 17;
    for step in 0..500 {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let ingress = (x >> 8) % 6 + 1;
        let egress = (x >> 16) % 6 + 1;
        match step % 7 {
            0 => {
                registry.clear(ingress);
            }
            6 if step % 91 == 6 => registry.clear_all(),
            _ => registry.set(ingress, egress),
        }
        assert_mirrored(&registry);

        let pairing = registry.pairing();
        let mut egresses: Vec<_> = pairing.iter().map(|p| p.egress).collect();
        egresses.sort_unstable();
        egresses.dedup();
        assert_eq!(egresses.len(), pairing.len());
    }
}
