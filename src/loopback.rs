//! Loopback scoping policy for address-based node IDs.
//!
//! Loopback addresses are reused verbatim on every host, so `127.0.0.1` seen
//! by two probes is two different things and must be qualified by the host
//! ID. Every other address is assumed unique enough that host qualification
//! would wrongly split one real address into several nodes.

use std::net::IpAddr;

/// Returns true if `address` is an IP literal in a loopback range.
///
/// Anything that does not parse as an IP literal (hostnames, unresolved
/// names, empty strings) is never treated as loopback.
///
/// IPv4-mapped IPv6 addresses are judged by the IPv4 address they carry.
///
/// # Examples
///
/// ```
/// use topology_id::is_loopback;
///
/// assert!(is_loopback("127.0.0.1"));
/// assert!(is_loopback("::1"));
/// assert!(!is_loopback("8.8.8.8"));
/// assert!(!is_loopback("localhost"));
/// ```
#[must_use]
pub fn is_loopback(address: &str) -> bool {
    address
        .parse::<IpAddr>()
        .is_ok_and(|ip| ip.to_canonical().is_loopback())
}
