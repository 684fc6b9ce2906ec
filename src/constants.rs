//! Reserved literals of the topology ID format.
//!
//! Every producer and consumer must agree on these byte-for-byte.

/// Separates contextual scopes inside a node ID.
///
/// Different topologies have different key structures, but all of them
/// join their parts with this delimiter.
pub const SCOPE_DELIM: char = ';';

/// Separates two node IDs in keys that represent edges.
pub const EDGE_DELIM: char = '|';

/// Remainder of every host node ID.
///
/// Keeps a host node ID from ever equalling the raw host ID reported by a probe.
pub const HOST_MARKER: &str = "<host>";

/// First field of every pseudo node ID.
pub const PSEUDO_PREFIX: &str = "pseudo";

/// Prefix marking an adjacency ID.
pub const ADJACENCY_PREFIX: char = '>';

/// Pseudo node part standing in for any remote IP.
pub const THE_INTERNET: &str = "theinternet";

/// Characters that may never appear inside a raw ID component.
pub const RESERVED_CHARS: [char; 2] = [SCOPE_DELIM, EDGE_DELIM];
