//! Node, edge and adjacency IDs for distributed topology graphs.
//!
//! Probes running on many hosts report what they see independently and
//! without coordination. This crate gives every one of them the same
//! deterministic way to name hosts, processes, containers, addresses,
//! endpoints and synthetic "pseudo" nodes, and gives consumers the means to
//! take those names apart again, including the IP addresses inside them.
//!
//! # Overview
//!
//! ```text
//! host       host-id;<host>
//! process    host-id;pid
//! container  host-id;container-id
//! address    [host-id];address
//! endpoint   [host-id];address;port
//! pseudo     pseudo;part;part...
//! adjacency  >node-id
//! edge       src-node-id|dst-node-id
//! ```
//!
//! Address and endpoint IDs carry the host ID only for loopback addresses;
//! see [`is_loopback`].
//!
//! # Quick Start
//!
//! ```rust
//! use topology_id::{make_edge_id, make_endpoint_node_id, parse_edge_id, IdAddresser};
//!
//! let src = make_endpoint_node_id("probe-1", "10.0.0.1", "43120");
//! let dst = make_endpoint_node_id("probe-1", "10.0.0.2", "80");
//! let edge = make_edge_id(&src, &dst);
//!
//! let (from, to) = parse_edge_id(&edge).unwrap();
//! assert_eq!(from, src);
//! assert_eq!(
//!     IdAddresser::Endpoint.address(to).unwrap().to_string(),
//!     "10.0.0.2"
//! );
//! ```
//!
//! # Reserved Characters
//!
//! | Literal | Meaning |
//! |---------|---------|
//! | `;` | scope delimiter inside a node ID |
//! | `\|` | edge delimiter between two node IDs |
//! | `<host>` | host node marker |
//! | `pseudo` | pseudo node prefix |
//! | `>` | adjacency prefix |
//!
//! Raw parts passed to the constructors must not contain either delimiter.
//! [`Component`] and the [`checked`] constructors enforce this when the
//! inputs are untrusted.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod addresser;
mod component;
mod constants;
mod edge;
mod error;
#[cfg(kani)]
mod kani_impls;
mod loopback;
mod node_id;
pub mod prelude;
mod topology;

pub use addresser::IdAddresser;
pub use component::Component;
pub use constants::{
    ADJACENCY_PREFIX, EDGE_DELIM, HOST_MARKER, PSEUDO_PREFIX, RESERVED_CHARS, SCOPE_DELIM,
    THE_INTERNET,
};
pub use edge::{make_adjacency_id, make_edge_id, parse_adjacency_id, parse_edge_id};
pub use error::{ComponentError, UnknownTopologyKind};
pub use loopback::is_loopback;
pub use node_id::{
    checked, is_host_node_id, is_pseudo_node_id, make_address_node_id, make_container_node_id,
    make_endpoint_node_id, make_host_node_id, make_process_node_id, make_pseudo_node_id,
    parse_address_node_id, parse_endpoint_node_id, parse_node_id, parse_pseudo_node_id,
    the_internet_node_id, AddressNode, EndpointNode,
};
pub use topology::{Topology, TopologyKind};
