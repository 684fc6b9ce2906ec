//! Per-topology wiring of the address extraction strategy.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::addresser::IdAddresser;
use crate::error::UnknownTopologyKind;

/// The kinds of topology whose node IDs this crate encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TopologyKind {
    /// Transport endpoints (`address:port`).
    Endpoint,
    /// Network addresses.
    Address,
    /// Processes.
    Process,
    /// Containers.
    Container,
    /// Hosts.
    Host,
}

impl TopologyKind {
    /// All topology kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Endpoint,
        Self::Address,
        Self::Process,
        Self::Container,
        Self::Host,
    ];

    /// Returns the address extraction strategy matching this kind's node IDs.
    ///
    /// Process, container and host topologies have no edges, so they get
    /// [`IdAddresser::Panic`].
    #[must_use]
    pub const fn default_addresser(self) -> IdAddresser {
        match self {
            Self::Endpoint => IdAddresser::Endpoint,
            Self::Address => IdAddresser::Address,
            Self::Process | Self::Container | Self::Host => IdAddresser::Panic,
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endpoint => "endpoint",
            Self::Address => "address",
            Self::Process => "process",
            Self::Container => "container",
            Self::Host => "host",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = UnknownTopologyKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTopologyKind(s.to_string()))
    }
}

/// A topology together with the strategy used to read addresses from its
/// node IDs.
///
/// The strategy is chosen once, when the topology is configured, and never
/// changes afterwards.
///
/// # Examples
///
/// ```
/// use topology_id::{make_endpoint_node_id, IdAddresser, Topology, TopologyKind};
///
/// let endpoints = Topology::new(TopologyKind::Endpoint);
/// assert_eq!(endpoints.addresser(), IdAddresser::Endpoint);
///
/// let id = make_endpoint_node_id("h1", "10.0.0.1", "80");
/// assert_eq!(endpoints.address_of(&id).unwrap().to_string(), "10.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    kind: TopologyKind,
    addresser: IdAddresser,
}

impl Topology {
    /// Creates a topology using the kind's default addresser.
    #[must_use]
    pub const fn new(kind: TopologyKind) -> Self {
        Self {
            kind,
            addresser: kind.default_addresser(),
        }
    }

    /// Overrides the address extraction strategy.
    #[must_use]
    pub const fn with_addresser(mut self, addresser: IdAddresser) -> Self {
        self.addresser = addresser;
        self
    }

    /// Returns the topology kind.
    #[must_use]
    pub const fn kind(&self) -> TopologyKind {
        self.kind
    }

    /// Returns the address extraction strategy.
    #[must_use]
    pub const fn addresser(&self) -> IdAddresser {
        self.addresser
    }

    /// Extracts the IP address carried by one of this topology's node IDs.
    ///
    /// # Panics
    ///
    /// Panics if the topology is wired with [`IdAddresser::Panic`].
    #[must_use]
    pub fn address_of(&self, node_id: &str) -> Option<IpAddr> {
        self.addresser.address(node_id)
    }
}

impl From<TopologyKind> for Topology {
    fn from(kind: TopologyKind) -> Self {
        Self::new(kind)
    }
}
