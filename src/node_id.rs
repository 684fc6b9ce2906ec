//! Node ID constructors and parsers.
//!
//! Every node ID has the shape `[host-id];<remainder>`:
//!
//! ```text
//! host       host-id;<host>
//! process    host-id;pid
//! container  host-id;container-id
//! address    [host-id];address          (host-id only for loopback)
//! endpoint   [host-id];address;port     (host-id only for loopback)
//! pseudo     pseudo;part;part...
//! ```
//!
//! # Reserved characters
//!
//! The constructors here join raw parts without inspecting them. A part that
//! contains [`SCOPE_DELIM`] or [`EDGE_DELIM`](crate::EDGE_DELIM) yields a key
//! that no longer parses back into the same parts. Use the constructors in
//! [`checked`] with [`Component`](crate::Component) values when the inputs
//! are not already known to be delimiter-free.

use crate::constants::{HOST_MARKER, PSEUDO_PREFIX, SCOPE_DELIM, THE_INTERNET};
use crate::loopback::is_loopback;

/// Produces a host node ID.
///
/// Host IDs come from the probe and are presumed globally unique; the
/// [`HOST_MARKER`] suffix makes sure a raw host ID is never mistaken for a
/// host node ID.
///
/// The host ID must not contain a reserved delimiter.
///
/// # Examples
///
/// ```
/// use topology_id::make_host_node_id;
///
/// assert_eq!(make_host_node_id("probe-42"), "probe-42;<host>");
/// ```
#[must_use]
pub fn make_host_node_id(host_id: &str) -> String {
    join(host_id, HOST_MARKER)
}

/// Produces a process node ID.
///
/// Neither part may contain a reserved delimiter.
#[must_use]
pub fn make_process_node_id(host_id: &str, pid: &str) -> String {
    join(host_id, pid)
}

/// Produces a container node ID.
///
/// Neither part may contain a reserved delimiter.
#[must_use]
pub fn make_container_node_id(host_id: &str, container_id: &str) -> String {
    join(host_id, container_id)
}

/// Produces an address node ID.
///
/// Only loopback addresses keep the host ID as their scope; every other
/// address gets an empty scope, so the same routable address observed from
/// different hosts maps to a single node.
///
/// Neither part may contain a reserved delimiter.
///
/// # Examples
///
/// ```
/// use topology_id::make_address_node_id;
///
/// assert_eq!(make_address_node_id("h1", "127.0.0.1"), "h1;127.0.0.1");
/// assert_eq!(make_address_node_id("h1", "8.8.8.8"), ";8.8.8.8");
/// ```
#[must_use]
pub fn make_address_node_id(host_id: &str, address: &str) -> String {
    if is_loopback(address) {
        join(host_id, address)
    } else {
        join("", address)
    }
}

/// Produces an endpoint node ID: an address node ID followed by a port.
///
/// No part may contain a reserved delimiter.
#[must_use]
pub fn make_endpoint_node_id(host_id: &str, address: &str, port: &str) -> String {
    let mut id = make_address_node_id(host_id, address);
    id.push(SCOPE_DELIM);
    id.push_str(port);
    id
}

/// Produces a pseudo node ID from free-form parts.
///
/// With no parts the result is just [`PSEUDO_PREFIX`].
///
/// # Examples
///
/// ```
/// use topology_id::make_pseudo_node_id;
///
/// assert_eq!(make_pseudo_node_id(["theinternet"]), "pseudo;theinternet");
/// assert_eq!(make_pseudo_node_id(["a", "b"]), "pseudo;a;b");
/// ```
#[must_use]
pub fn make_pseudo_node_id<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut id = String::from(PSEUDO_PREFIX);
    for part in parts {
        id.push(SCOPE_DELIM);
        id.push_str(part.as_ref());
    }
    id
}

/// Produces the pseudo node ID that stands for any remote IP.
#[must_use]
pub fn the_internet_node_id() -> String {
    make_pseudo_node_id([THE_INTERNET])
}

/// Splits a node ID into its host ID and remainder.
///
/// Splits on the first scope delimiter, so the remainder may itself contain
/// further delimiters (endpoint IDs, pseudo IDs). The host ID may be empty.
/// Returns `None` if there is no scope delimiter at all.
///
/// # Examples
///
/// ```
/// use topology_id::parse_node_id;
///
/// assert_eq!(parse_node_id("probe-42;<host>"), Some(("probe-42", "<host>")));
/// assert_eq!(parse_node_id(";8.8.8.8"), Some(("", "8.8.8.8")));
/// assert_eq!(parse_node_id("no-delimiter"), None);
/// ```
#[must_use]
pub fn parse_node_id(node_id: &str) -> Option<(&str, &str)> {
    node_id.split_once(SCOPE_DELIM)
}

/// Returns true if `node_id` was produced by [`make_host_node_id`].
#[must_use]
pub fn is_host_node_id(node_id: &str) -> bool {
    parse_node_id(node_id).is_some_and(|(_, remainder)| remainder == HOST_MARKER)
}

/// Returns true if the first field of `node_id` is [`PSEUDO_PREFIX`].
#[must_use]
pub fn is_pseudo_node_id(node_id: &str) -> bool {
    node_id.split(SCOPE_DELIM).next() == Some(PSEUDO_PREFIX)
}

/// Recovers the parts of a pseudo node ID, without the prefix.
///
/// Returns `None` if the first field is not [`PSEUDO_PREFIX`].
///
/// # Examples
///
/// ```
/// use topology_id::{make_pseudo_node_id, parse_pseudo_node_id};
///
/// let id = make_pseudo_node_id(["a", "b"]);
/// assert_eq!(parse_pseudo_node_id(&id), Some(vec!["a", "b"]));
/// assert_eq!(parse_pseudo_node_id("h;1"), None);
/// ```
#[must_use]
pub fn parse_pseudo_node_id(node_id: &str) -> Option<Vec<&str>> {
    let mut fields = node_id.split(SCOPE_DELIM);
    if fields.next() != Some(PSEUDO_PREFIX) {
        return None;
    }
    Some(fields.collect())
}

/// The parts of an address node ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressNode<'a> {
    /// Scoping host ID; present only for loopback addresses.
    pub host_id: Option<&'a str>,
    /// The address as it was written into the ID.
    pub address: &'a str,
}

/// The parts of an endpoint node ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointNode<'a> {
    /// Scoping host ID; present only for loopback addresses.
    pub host_id: Option<&'a str>,
    /// The address as it was written into the ID.
    pub address: &'a str,
    /// The port as it was written into the ID.
    pub port: &'a str,
}

/// Parses an address node ID into its parts.
///
/// Requires exactly two scope-delimited fields. An empty host scope is
/// reported as `None`.
///
/// # Examples
///
/// ```
/// use topology_id::{make_address_node_id, parse_address_node_id};
///
/// let id = make_address_node_id("h1", "127.0.0.1");
/// let node = parse_address_node_id(&id).unwrap();
/// assert_eq!(node.host_id, Some("h1"));
/// assert_eq!(node.address, "127.0.0.1");
/// ```
#[must_use]
pub fn parse_address_node_id(node_id: &str) -> Option<AddressNode<'_>> {
    let (host_id, address) = parse_node_id(node_id)?;
    if address.contains(SCOPE_DELIM) {
        return None;
    }
    Some(AddressNode {
        host_id: non_empty(host_id),
        address,
    })
}

/// Parses an endpoint node ID into its parts.
///
/// Requires exactly three scope-delimited fields. An empty host scope is
/// reported as `None`.
#[must_use]
pub fn parse_endpoint_node_id(node_id: &str) -> Option<EndpointNode<'_>> {
    let mut fields = node_id.split(SCOPE_DELIM);
    let (Some(host_id), Some(address), Some(port), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return None;
    };
    Some(EndpointNode {
        host_id: non_empty(host_id),
        address,
        port,
    })
}

fn join(scope: &str, remainder: &str) -> String {
    let mut id = String::with_capacity(scope.len() + 1 + remainder.len());
    id.push_str(scope);
    id.push(SCOPE_DELIM);
    id.push_str(remainder);
    id
}

const fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Constructors over validated [`Component`](crate::Component) parts.
///
/// Output is byte-identical to the unchecked constructors of the same name;
/// the only difference is that the inputs have already been proven free of
/// reserved delimiters, so every result round-trips.
///
/// ```
/// use topology_id::{checked, make_process_node_id, Component};
///
/// let host = Component::parse("h1").unwrap();
/// let pid = Component::parse("1234").unwrap();
/// assert_eq!(checked::make_process_node_id(&host, &pid), make_process_node_id("h1", "1234"));
/// ```
pub mod checked {
    use crate::component::Component;

    /// Checked form of [`make_host_node_id`](super::make_host_node_id).
    #[must_use]
    pub fn make_host_node_id(host_id: &Component) -> String {
        super::make_host_node_id(host_id.as_str())
    }

    /// Checked form of [`make_process_node_id`](super::make_process_node_id).
    #[must_use]
    pub fn make_process_node_id(host_id: &Component, pid: &Component) -> String {
        super::make_process_node_id(host_id.as_str(), pid.as_str())
    }

    /// Checked form of [`make_container_node_id`](super::make_container_node_id).
    #[must_use]
    pub fn make_container_node_id(host_id: &Component, container_id: &Component) -> String {
        super::make_container_node_id(host_id.as_str(), container_id.as_str())
    }

    /// Checked form of [`make_address_node_id`](super::make_address_node_id).
    #[must_use]
    pub fn make_address_node_id(host_id: &Component, address: &Component) -> String {
        super::make_address_node_id(host_id.as_str(), address.as_str())
    }

    /// Checked form of [`make_endpoint_node_id`](super::make_endpoint_node_id).
    #[must_use]
    pub fn make_endpoint_node_id(
        host_id: &Component,
        address: &Component,
        port: &Component,
    ) -> String {
        super::make_endpoint_node_id(host_id.as_str(), address.as_str(), port.as_str())
    }

    /// Checked form of [`make_pseudo_node_id`](super::make_pseudo_node_id).
    #[must_use]
    pub fn make_pseudo_node_id(parts: &[Component]) -> String {
        super::make_pseudo_node_id(parts.iter().map(Component::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;

    #[test]
    fn host_node_id() {
        assert_eq!(make_host_node_id("probe-42"), "probe-42;<host>");
        assert_eq!(parse_node_id("probe-42;<host>"), Some(("probe-42", "<host>")));
        assert!(is_host_node_id("probe-42;<host>"));
        assert!(!is_host_node_id("probe-42;1234"));
    }

    #[test]
    fn process_node_id_roundtrip() {
        let id = make_process_node_id("h1", "1234");
        assert_eq!(id, "h1;1234");
        assert_eq!(parse_node_id(&id), Some(("h1", "1234")));
    }

    #[test]
    fn container_node_id_roundtrip() {
        let id = make_container_node_id("h1", "a1b2c3");
        assert_eq!(parse_node_id(&id), Some(("h1", "a1b2c3")));
    }

    #[test]
    fn address_node_id_loopback_keeps_host() {
        assert_eq!(make_address_node_id("h1", "127.0.0.1"), "h1;127.0.0.1");
        assert_eq!(make_address_node_id("h1", "::1"), "h1;::1");
        assert_ne!(
            make_address_node_id("h1", "127.0.0.1"),
            make_address_node_id("h2", "127.0.0.1")
        );
    }

    #[test]
    fn address_node_id_routable_drops_host() {
        assert_eq!(make_address_node_id("h1", "8.8.8.8"), ";8.8.8.8");
        assert_eq!(
            make_address_node_id("h1", "8.8.8.8"),
            make_address_node_id("h2", "8.8.8.8")
        );
    }

    #[test]
    fn address_node_id_non_ip_drops_host() {
        assert_eq!(make_address_node_id("h1", "example.com"), ";example.com");
    }

    #[test]
    fn endpoint_node_id() {
        assert_eq!(make_endpoint_node_id("h1", "10.0.0.1", "80"), ";10.0.0.1;80");
        assert_eq!(
            make_endpoint_node_id("h1", "127.0.0.1", "8080"),
            "h1;127.0.0.1;8080"
        );
    }

    #[test]
    fn empty_parts_are_well_formed() {
        assert_eq!(make_process_node_id("", ""), ";");
        assert_eq!(parse_node_id(";"), Some(("", "")));
        assert_eq!(make_host_node_id(""), ";<host>");
    }

    #[test]
    fn pseudo_node_id() {
        assert_eq!(make_pseudo_node_id(std::iter::empty::<&str>()), "pseudo");
        assert_eq!(the_internet_node_id(), "pseudo;theinternet");
        assert!(is_pseudo_node_id("pseudo;theinternet"));
        assert!(is_pseudo_node_id("pseudo"));
        assert!(!is_pseudo_node_id("pseudonym;1"));
        assert!(!is_pseudo_node_id("h1;pseudo"));
    }

    #[test]
    fn pseudo_node_id_parts() {
        let id = make_pseudo_node_id(["10.0.0.1", "80"]);
        assert_eq!(parse_pseudo_node_id(&id), Some(vec!["10.0.0.1", "80"]));
        assert_eq!(parse_pseudo_node_id("pseudo"), Some(vec![]));
        assert_eq!(parse_pseudo_node_id(""), None);
    }

    #[test]
    fn parse_empty_fails() {
        assert_eq!(parse_node_id(""), None);
        assert_eq!(parse_address_node_id(""), None);
        assert_eq!(parse_endpoint_node_id(""), None);
        assert!(!is_host_node_id(""));
        assert!(!is_pseudo_node_id(""));
    }

    #[test]
    fn parse_splits_on_first_delimiter() {
        assert_eq!(parse_node_id(";10.0.0.1;80"), Some(("", "10.0.0.1;80")));
    }

    #[test]
    fn address_node_parts() {
        let node = parse_address_node_id(";8.8.8.8").unwrap();
        assert_eq!(node.host_id, None);
        assert_eq!(node.address, "8.8.8.8");

        assert_eq!(parse_address_node_id(";10.0.0.1;80"), None);
        assert_eq!(parse_address_node_id("8.8.8.8"), None);
    }

    #[test]
    fn endpoint_node_parts() {
        let id = make_endpoint_node_id("h1", "127.0.0.1", "8080");
        let node = parse_endpoint_node_id(&id).unwrap();
        assert_eq!(node.host_id, Some("h1"));
        assert_eq!(node.address, "127.0.0.1");
        assert_eq!(node.port, "8080");

        assert_eq!(parse_endpoint_node_id(";10.0.0.1"), None);
        assert_eq!(parse_endpoint_node_id(";10.0.0.1;80;x"), None);
    }

    #[test]
    fn checked_constructors_match_raw() {
        let host = Component::parse("h1").unwrap();
        let loopback = Component::parse("127.0.0.1").unwrap();
        let port = Component::parse("80").unwrap();

        assert_eq!(checked::make_host_node_id(&host), make_host_node_id("h1"));
        assert_eq!(
            checked::make_container_node_id(&host, &port),
            make_container_node_id("h1", "80")
        );
        assert_eq!(
            checked::make_address_node_id(&host, &loopback),
            make_address_node_id("h1", "127.0.0.1")
        );
        assert_eq!(
            checked::make_endpoint_node_id(&host, &loopback, &port),
            make_endpoint_node_id("h1", "127.0.0.1", "80")
        );
        assert_eq!(
            checked::make_pseudo_node_id(&[host.clone(), port.clone()]),
            "pseudo;h1;80"
        );
    }
}
