//! Static domain and keyword blacklist.

use url::Url;

/// Known-abuse domains and other link shorteners (chaining shorteners hides the
/// real target).
pub const BLACKLISTED_DOMAINS: &[&str] = &[
    "malware.com",
    "phishing-site.com",
    "virus-download.net",
    "bit.ly",
    "tinyurl.com",
    "goo.gl",
    "t.co",
    "ow.ly",
    "short.link",
];

/// Substrings rejected anywhere in the lowercased URL.
pub const BLACKLISTED_KEYWORDS: &[&str] = &[
    "malware",
    "virus",
    "trojan",
    "ransomware",
    "phishing",
    "scam",
    "fraud",
    "hack",
    "exploit",
    "crack",
    "keygen",
    "warez",
    "illegal",
    "piracy",
    "torrent",
];

/// Outcome of a blacklist lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistVerdict {
    pub is_blacklisted: bool,
    pub reason: Option<String>,
}

impl BlacklistVerdict {
    fn clean() -> Self {
        Self {
            is_blacklisted: false,
            reason: None,
        }
    }

    fn hit(reason: String) -> Self {
        Self {
            is_blacklisted: true,
            reason: Some(reason),
        }
    }
}

/// Domain and keyword lists. The built-in lists are always present; entries
/// from configuration are appended after them.
#[derive(Debug, Clone)]
pub struct Blacklist {
    domains: Vec<String>,
    keywords: Vec<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self {
            domains: BLACKLISTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            keywords: BLACKLISTED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Blacklist {
    /// Built-in lists extended with extra entries. Entries are lowercased and
    /// blanks are dropped.
    pub fn with_extra(extra_domains: &[String], extra_keywords: &[String]) -> Self {
        let mut list = Self::default();
        let clean = |s: &String| {
            let s = s.trim().trim_start_matches('.').to_ascii_lowercase();
            (!s.is_empty()).then_some(s)
        };
        list.domains.extend(extra_domains.iter().filter_map(clean));
        list.keywords.extend(extra_keywords.iter().filter_map(clean));
        list
    }

    /// Checks `url` against the domain list (exact or subdomain match) and the
    /// keyword list (substring match). Unparseable input is treated as
    /// blacklisted.
    pub fn check(&self, url: &str) -> BlacklistVerdict {
        let host = match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_ascii_lowercase)) {
            Some(h) => h,
            None => return BlacklistVerdict::hit("Invalid URL format".to_string()),
        };

        if let Some(domain) = self.domains.iter().find(|d| host_matches(&host, d)) {
            return BlacklistVerdict::hit(format!("Domain {domain} is blacklisted"));
        }

        let full = url.to_lowercase();
        if let Some(keyword) = self.keywords.iter().find(|k| full.contains(k.as_str())) {
            return BlacklistVerdict::hit(format!("URL contains blacklisted keyword: {keyword}"));
        }

        BlacklistVerdict::clean()
    }
}

/// `host == entry` or `host` is a subdomain of `entry`.
pub(crate) fn host_matches(host: &str, entry: &str) -> bool {
    host == entry
        || host
            .strip_suffix(entry)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Checks `url` against the built-in lists only.
pub fn check_blacklist(url: &str) -> BlacklistVerdict {
    Blacklist::default().check(url)
}
