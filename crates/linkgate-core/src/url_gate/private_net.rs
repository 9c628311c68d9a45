//! Private-network classification for IPv4 literals.
//!
//! Only dotted-quad literals are classified. DNS names always return false:
//! a name that resolves to a private address is not detected here and has to
//! be handled at fetch time by whoever dereferences the URL.

use once_cell::sync::Lazy;
use regex::Regex;

static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("dotted-quad regex must compile"));

/// True for loopback (127/8), RFC1918 (10/8, 172.16/12, 192.168/16) and the
/// 0/8 block (which covers `0.0.0.0`).
pub fn is_private_address(hostname: &str) -> bool {
    if !DOTTED_QUAD.is_match(hostname) {
        return false;
    }
    // Octets are read numerically, so "010.0.0.1" classifies like "10.0.0.1".
    let octets: Vec<u16> = hostname.split('.').filter_map(|p| p.parse().ok()).collect();
    let [a, b, _, _] = octets[..] else {
        return false;
    };
    a == 10
        || (a == 172 && (16..=31).contains(&b))
        || (a == 192 && b == 168)
        || a == 127
        || a == 0
}
