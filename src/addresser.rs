//! Recovering IP addresses from node IDs.

use std::fmt;
use std::net::IpAddr;

use tracing::debug;

use crate::constants::SCOPE_DELIM;

/// Strategy for turning a node ID into the IP address it carries.
///
/// Each topology picks one strategy up front; code that walks a topology can
/// then extract addresses without knowing which node kind it holds.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use topology_id::{make_endpoint_node_id, IdAddresser};
///
/// let id = make_endpoint_node_id("h1", "10.0.0.1", "80");
/// assert_eq!(
///     IdAddresser::Endpoint.address(&id),
///     Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
/// );
/// assert_eq!(IdAddresser::Address.address("bogus"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdAddresser {
    /// Endpoint node IDs: `host;address;port`.
    Endpoint,
    /// Address node IDs: `host;address`.
    Address,
    /// Topologies that never carry addresses.
    ///
    /// Calling [`IdAddresser::address`] on this variant panics. It marks a
    /// topology with no edges, where asking for an address is a wiring bug.
    Panic,
}

impl IdAddresser {
    /// Extracts the IP address embedded in `node_id`.
    ///
    /// Returns `None` when the ID has the wrong number of fields or the
    /// address field is not an IP literal. IPv4-mapped IPv6 addresses come
    /// back as the IPv4 address they carry.
    ///
    /// # Panics
    ///
    /// Always panics for [`IdAddresser::Panic`].
    #[must_use]
    pub fn address(&self, node_id: &str) -> Option<IpAddr> {
        match self {
            Self::Endpoint => address_field::<3>(node_id, "endpoint"),
            Self::Address => address_field::<2>(node_id, "address"),
            Self::Panic => panic!("IdAddresser::Panic called on {node_id:?}"),
        }
    }

    /// Returns the strategy name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Endpoint => "endpoint",
            Self::Address => "address",
            Self::Panic => "panic",
        }
    }
}

impl fmt::Display for IdAddresser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits into at most `N` fields and parses field 1 when exactly `N` exist.
fn address_field<const N: usize>(node_id: &str, kind: &'static str) -> Option<IpAddr> {
    let mut fields = node_id.splitn(N, SCOPE_DELIM);
    let address = fields.nth(1);
    let rest = fields.count();
    let Some(address) = address.filter(|_| rest == N - 2) else {
        debug!(node_id, kind, "node ID has the wrong number of fields");
        return None;
    };
    let Ok(ip) = address.parse::<IpAddr>() else {
        debug!(node_id, kind, address, "address field is not an IP literal");
        return None;
    };
    // IPv4-mapped IPv6 spellings name the same host as the plain IPv4 form.
    Some(ip.to_canonical())
}
