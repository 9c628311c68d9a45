//! URL validation gate.
//!
//! Turns raw user text into either a canonical http/https URL that is safe to
//! persist and later emit in a `Location` header, or a rejection reason.
//! The gate is a fixed sequence of checks; the first failing check decides
//! the verdict.

mod blacklist;
mod normalize;
mod patterns;
mod private_net;
mod reason;

pub use blacklist::{check_blacklist, Blacklist, BlacklistVerdict, BLACKLISTED_DOMAINS, BLACKLISTED_KEYWORDS};
pub use normalize::normalize;
pub use patterns::{first_suspicious_pattern, matches_suspicious_pattern};
pub use private_net::is_private_address;
pub use reason::RejectReason;

use crate::config::ValidationConfig;
use blacklist::host_matches;
use normalize::{canonical_string, parse_web_url};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::borrow::Cow;

/// Loopback and meta hostnames rejected by exact or subdomain match.
const BLOCKED_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0"];

/// Result of running the gate over one submission.
///
/// Serializes as `{"isValid", "sanitizedUrl", "errorReason"}`, the shape the
/// HTTP layer uses to pick a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub sanitized_url: Option<String>,
    pub error_reason: Option<RejectReason>,
}

impl ValidationVerdict {
    fn accepted(url: String) -> Self {
        Self {
            is_valid: true,
            sanitized_url: Some(url),
            error_reason: None,
        }
    }

    fn rejected(reason: RejectReason) -> Self {
        Self {
            is_valid: false,
            sanitized_url: None,
            error_reason: Some(reason),
        }
    }

    /// Human-readable rejection message, if rejected.
    pub fn error_message(&self) -> Option<String> {
        self.error_reason.as_ref().map(ToString::to_string)
    }

    /// `Ok(sanitized_url)` or `Err(reason)`.
    pub fn into_result(self) -> Result<String, RejectReason> {
        match (self.sanitized_url, self.error_reason) {
            (Some(url), None) if self.is_valid => Ok(url),
            (_, Some(reason)) => Err(reason),
            _ => Err(RejectReason::InvalidFormat),
        }
    }
}

/// Validator configured once and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Validator {
    min_length: usize,
    max_length: usize,
    blacklist: Blacklist,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl Validator {
    pub fn new(cfg: &ValidationConfig) -> Self {
        Self {
            min_length: cfg.min_length,
            max_length: cfg.max_length,
            blacklist: Blacklist::with_extra(&cfg.extra_blocked_domains, &cfg.extra_blocked_keywords),
        }
    }

    /// Runs the full gate. Never panics and never fails: every outcome is a
    /// verdict.
    pub fn validate_and_sanitize(&self, raw: &str) -> ValidationVerdict {
        match self.run_gate(raw) {
            Ok(url) => ValidationVerdict::accepted(url),
            Err(reason) => {
                tracing::debug!(%reason, "rejected submitted URL");
                ValidationVerdict::rejected(reason)
            }
        }
    }

    /// Same as [`Validator::validate_and_sanitize`] for input that may be absent
    /// (a missing form field or JSON key).
    pub fn validate_and_sanitize_opt(&self, raw: Option<&str>) -> ValidationVerdict {
        match raw {
            Some(raw) => self.validate_and_sanitize(raw),
            None => ValidationVerdict::rejected(RejectReason::Missing),
        }
    }

    fn run_gate(&self, raw: &str) -> Result<String, RejectReason> {
        if raw.is_empty() {
            return Err(RejectReason::Missing);
        }

        let url = raw.trim();
        let len = url.chars().count();
        if len > self.max_length {
            return Err(RejectReason::TooLong {
                max: self.max_length,
            });
        }
        if len < self.min_length {
            return Err(RejectReason::TooShort);
        }

        if let Some(pattern) = first_suspicious_pattern(url) {
            tracing::warn!(pattern, input = %url, "suspicious URL submission rejected");
            return Err(RejectReason::Suspicious);
        }

        let url: Cow<'_, str> = if has_http_scheme(url) {
            Cow::Borrowed(url)
        } else {
            Cow::Owned(format!("https://{url}"))
        };

        let parsed = parse_web_url(&url).ok_or(RejectReason::InvalidFormat)?;

        let listed = self.blacklist.check(&url);
        if listed.is_blacklisted {
            return Err(RejectReason::Blacklisted(
                listed.reason.unwrap_or_else(|| "URL is blacklisted".to_string()),
            ));
        }

        let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
        if BLOCKED_HOSTS.iter().any(|blocked| host_matches(&host, blocked)) {
            return Err(RejectReason::BlockedHost);
        }
        if is_private_address(&host) {
            return Err(RejectReason::PrivateAddress);
        }

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(RejectReason::Credentials);
        }

        Ok(canonical_string(parsed))
    }
}

/// Case-insensitive `http://` or `https://` prefix.
fn has_http_scheme(url: &str) -> bool {
    let head = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::default);

/// Runs the gate with default limits and the built-in blacklist.
pub fn validate_and_sanitize(raw: &str) -> ValidationVerdict {
    DEFAULT_VALIDATOR.validate_and_sanitize(raw)
}
