//! Rejection reasons reported by the validator.

use serde::{Serialize, Serializer};
use std::fmt;

/// Why a submitted URL was rejected. Every variant is a client-side problem;
/// none of them indicates a server fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Input absent or empty.
    Missing,
    /// Longer than the configured maximum (in characters).
    TooLong { max: usize },
    /// Shorter than the configured minimum.
    TooShort,
    /// Matched a suspicious pattern.
    Suspicious,
    /// Not an absolute http/https URL with a valid host.
    InvalidFormat,
    /// Blacklist hit; carries the blacklist's own message.
    Blacklisted(String),
    /// Loopback or meta hostname.
    BlockedHost,
    /// Private-network IPv4 literal.
    PrivateAddress,
    /// Embedded username or password.
    Credentials,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Missing => write!(f, "URL is required and must be a string"),
            RejectReason::TooLong { max } => write!(f, "URL too long (max {max} characters)"),
            RejectReason::TooShort => write!(f, "URL too short"),
            RejectReason::Suspicious => write!(f, "URL contains suspicious content"),
            RejectReason::InvalidFormat => write!(f, "Invalid URL format"),
            RejectReason::Blacklisted(reason) => write!(f, "{reason}"),
            RejectReason::BlockedHost => write!(f, "This domain is not allowed"),
            RejectReason::PrivateAddress => write!(f, "Private IP addresses are not allowed"),
            RejectReason::Credentials => write!(f, "URLs with credentials are not allowed"),
        }
    }
}

impl Serialize for RejectReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
