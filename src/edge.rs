//! Edge and adjacency keys.
//!
//! ```text
//! adjacency  >node-id
//! edge       src-node-id|dst-node-id
//! ```
//!
//! Node IDs never contain the edge delimiter, so splitting an edge ID on its
//! first `|` always recovers the original pair.

use crate::constants::{ADJACENCY_PREFIX, EDGE_DELIM};

/// Produces an adjacency ID from a node ID.
///
/// # Examples
///
/// ```
/// use topology_id::{make_adjacency_id, parse_adjacency_id};
///
/// let adj = make_adjacency_id("h1;1234");
/// assert_eq!(adj, ">h1;1234");
/// assert_eq!(parse_adjacency_id(&adj), Some("h1;1234"));
/// ```
#[must_use]
pub fn make_adjacency_id(node_id: &str) -> String {
    let mut id = String::with_capacity(node_id.len() + 1);
    id.push(ADJACENCY_PREFIX);
    id.push_str(node_id);
    id
}

/// Recovers the node ID from an adjacency ID.
///
/// Returns `None` if the input does not start with the adjacency prefix.
/// Only one prefix is stripped.
#[must_use]
pub fn parse_adjacency_id(adjacency_id: &str) -> Option<&str> {
    adjacency_id.strip_prefix(ADJACENCY_PREFIX)
}

/// Produces a directed edge ID from two node IDs.
///
/// Order matters: `make_edge_id(a, b)` and `make_edge_id(b, a)` differ
/// whenever `a != b`. Callers that need undirected keys must order the pair
/// themselves.
///
/// # Examples
///
/// ```
/// use topology_id::make_edge_id;
///
/// assert_eq!(
///     make_edge_id("h1;10.0.0.1", "h2;10.0.0.2"),
///     "h1;10.0.0.1|h2;10.0.0.2"
/// );
/// ```
#[must_use]
pub fn make_edge_id(src_node_id: &str, dst_node_id: &str) -> String {
    let mut id = String::with_capacity(src_node_id.len() + 1 + dst_node_id.len());
    id.push_str(src_node_id);
    id.push(EDGE_DELIM);
    id.push_str(dst_node_id);
    id
}

/// Splits an edge ID into its source and destination node IDs.
///
/// Splits on the first edge delimiter. Returns `None` if there is none.
#[must_use]
pub fn parse_edge_id(edge_id: &str) -> Option<(&str, &str)> {
    edge_id.split_once(EDGE_DELIM)
}
