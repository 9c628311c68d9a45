//! Structural URL checks and canonical re-serialization.

use url::{Host, Position, Url};

/// Parses `candidate` as an absolute http/https URL with a usable host.
///
/// Domain hosts must be fully qualified: at least two labels, letters/digits/
/// hyphens only (so no underscores), no trailing dot, and an alphabetic or
/// punycode TLD. IP literals are accepted here and classified later.
pub(crate) fn parse_web_url(candidate: &str) -> Option<Url> {
    let url = Url::parse(candidate).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host_ok = match url.host()? {
        Host::Domain(domain) => is_qualified_domain(domain),
        Host::Ipv4(_) | Host::Ipv6(_) => true,
    };
    host_ok.then_some(url)
}

fn is_qualified_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.ends_with('.') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    let tld = labels[labels.len() - 1];
    let tld_ok = tld.len() >= 2
        && (tld.bytes().all(|b| b.is_ascii_alphabetic()) || tld.starts_with("xn--"));
    labels_ok && tld_ok
}

fn known_default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Canonical string form: default port dropped, bare-root path collapsed.
pub(crate) fn canonical_string(mut url: Url) -> String {
    if url.port().is_some() && url.port() == known_default_port(url.scheme()) {
        // Cannot fail: http(s) URLs always have a host.
        let _ = url.set_port(None);
    }
    if url.path() == "/" {
        return format!("{}{}", &url[..Position::BeforePath], &url[Position::AfterPath..]);
    }
    url.into()
}

/// Normalizes an absolute URL. Idempotent: normalizing the output again
/// yields the same string. Returns `None` when `url` does not parse.
pub fn normalize(url: &str) -> Option<String> {
    Url::parse(url).ok().map(canonical_string)
}
