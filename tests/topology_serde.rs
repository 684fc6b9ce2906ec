//! Topology wiring loaded from configuration.

#![cfg(feature = "serde")]

use topology_id::{Component, IdAddresser, Topology, TopologyKind};

#[test]
fn topology_kind_uses_lowercase_names() {
    let json = serde_json::to_string(&TopologyKind::Container).unwrap();
    assert_eq!(json, "\"container\"");
    let kind: TopologyKind = serde_json::from_str("\"endpoint\"").unwrap();
    assert_eq!(kind, TopologyKind::Endpoint);
}

#[test]
fn addresser_uses_lowercase_names() {
    let json = serde_json::to_string(&IdAddresser::Panic).unwrap();
    assert_eq!(json, "\"panic\"");
    let addresser: IdAddresser = serde_json::from_str("\"address\"").unwrap();
    assert_eq!(addresser, IdAddresser::Address);
}

#[test]
fn topology_from_config() {
    let topology: Topology =
        serde_json::from_str(r#"{"kind":"address","addresser":"address"}"#).unwrap();
    assert_eq!(topology, Topology::new(TopologyKind::Address));
    assert!(topology.address_of(";10.0.0.1").is_some());
}

#[test]
fn topology_serde_roundtrip() {
    for kind in TopologyKind::ALL {
        let topology = Topology::new(kind);
        let json = serde_json::to_string(&topology).unwrap();
        let back: Topology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, topology);
    }
}

#[test]
fn unknown_addresser_is_rejected() {
    let result: Result<Topology, _> =
        serde_json::from_str(r#"{"kind":"host","addresser":"magic"}"#);
    assert!(result.is_err());
}

#[test]
fn component_deserialize_validates() {
    let ok: Component = serde_json::from_str("\"probe-42\"").unwrap();
    assert_eq!(ok.as_str(), "probe-42");
    assert_eq!(serde_json::to_string(&ok).unwrap(), "\"probe-42\"");

    let err = serde_json::from_str::<Component>("\"a;b\"").unwrap_err();
    assert!(err.to_string().contains("scope delimiter"));
}
