//! Kani Arbitrary implementations and proof harnesses for the ID format.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{
    Component, IdAddresser, make_adjacency_id, make_edge_id, make_process_node_id,
    parse_adjacency_id, parse_edge_id, parse_node_id,
};

/// Characters a component may contain; reserved delimiters are excluded.
const COMPONENT_CHARS: &[u8] = b"abcz019.:-_<>";

fn arbitrary_component_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % COMPONENT_CHARS.len();
    COMPONENT_CHARS[idx] as char
}

impl kani::Arbitrary for Component {
    fn any() -> Self {
        // 0-4 chars for tractability
        let len: usize = kani::any();
        let len = len % 5;

        let s: String = (0..len).map(|_| arbitrary_component_char()).collect();
        Component::parse(&s).expect("valid component by construction")
    }
}

/// Proof: process node IDs split back into their parts.
#[kani::proof]
#[kani::unwind(12)]
fn proof_node_id_roundtrip() {
    let host: Component = kani::any();
    let pid: Component = kani::any();
    let id = make_process_node_id(host.as_str(), pid.as_str());
    assert_eq!(parse_node_id(&id), Some((host.as_str(), pid.as_str())));
}

/// Proof: edge IDs built from delimiter-free node IDs split back into them.
#[kani::proof]
#[kani::unwind(12)]
fn proof_edge_roundtrip() {
    let src: Component = kani::any();
    let dst: Component = kani::any();
    let edge = make_edge_id(src.as_str(), dst.as_str());
    assert_eq!(parse_edge_id(&edge), Some((src.as_str(), dst.as_str())));
}

/// Proof: adjacency marking is inverted exactly.
#[kani::proof]
#[kani::unwind(8)]
fn proof_adjacency_roundtrip() {
    let node: Component = kani::any();
    let adj = make_adjacency_id(node.as_str());
    assert_eq!(parse_adjacency_id(&adj), Some(node.as_str()));
}

/// Proof: an address extractor never panics on a single component.
#[kani::proof]
#[kani::unwind(8)]
fn proof_addresser_total_on_one_field() {
    let s: Component = kani::any();
    assert!(IdAddresser::Address.address(s.as_str()).is_none());
    assert!(IdAddresser::Endpoint.address(s.as_str()).is_none());
}
