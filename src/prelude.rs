//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use topology_id::prelude::*;
//!
//! let id = make_process_node_id("probe-42", "1234");
//! assert_eq!(parse_node_id(&id), Some(("probe-42", "1234")));
//! ```
//!
//! The [`checked`](crate::checked) constructors share names with the raw ones
//! and are left out; import them through their module.

pub use crate::{
    // Constructors
    make_address_node_id, make_adjacency_id, make_container_node_id, make_edge_id,
    make_endpoint_node_id, make_host_node_id, make_process_node_id, make_pseudo_node_id,
    the_internet_node_id,
    // Parsers and predicates
    is_host_node_id, is_loopback, is_pseudo_node_id, parse_address_node_id, parse_adjacency_id,
    parse_edge_id, parse_endpoint_node_id, parse_node_id, parse_pseudo_node_id,
    // Types
    AddressNode, Component, EndpointNode, IdAddresser, Topology, TopologyKind,
    // Errors
    ComponentError, UnknownTopologyKind,
    // Constants
    ADJACENCY_PREFIX, EDGE_DELIM, HOST_MARKER, PSEUDO_PREFIX, SCOPE_DELIM, THE_INTERNET,
};
