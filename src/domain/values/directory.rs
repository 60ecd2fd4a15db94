//! Directory classification of ranking hostnames.
//!
//! Review directories and business-listing aggregators rank for local service
//! keywords on authority alone; a purpose-built site can displace them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known low-value directory and aggregator hostnames.
pub const DIRECTORY_DOMAINS: &[&str] = &[
    "yelp.com",
    "bbb.org",
    "angieslist.com",
    "angi.com",
    "yellowpages.com",
    "thumbtack.com",
    "homeadvisor.com",
    "houzz.com",
    "manta.com",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainClass {
    Directory,
    Other,
}

impl fmt::Display for DomainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainClass::Directory => write!(f, "directory"),
            DomainClass::Other => write!(f, "other"),
        }
    }
}

/// Classify a bare hostname (scheme and `www.` already stripped).
///
/// Case-insensitive substring match against [`DIRECTORY_DOMAINS`], so
/// subdomains such as `m.yelp.com` also classify as directories. Anything
/// else, including empty input, is [`DomainClass::Other`].
pub fn classify(domain: &str) -> DomainClass {
    let domain = domain.trim().to_lowercase();
    if domain.is_empty() {
        return DomainClass::Other;
    }
    if DIRECTORY_DOMAINS.iter().any(|d| domain.contains(d)) {
        DomainClass::Directory
    } else {
        DomainClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_directories() {
        assert_eq!(classify("yelp.com"), DomainClass::Directory);
        assert_eq!(classify("bbb.org"), DomainClass::Directory);
        assert_eq!(classify("houzz.com"), DomainClass::Directory);
    }

    #[test]
    fn test_case_insensitive_and_subdomains() {
        assert_eq!(classify("YELP.COM"), DomainClass::Directory);
        assert_eq!(classify("m.yelp.com"), DomainClass::Directory);
        assert_eq!(classify("phoenix.HomeAdvisor.com"), DomainClass::Directory);
    }

    #[test]
    fn test_local_business_is_other() {
        assert_eq!(classify("localplumbingpros.com"), DomainClass::Other);
        assert_eq!(classify("cityroofingexperts.com"), DomainClass::Other);
    }

    #[test]
    fn test_malformed_input_is_other() {
        assert_eq!(classify(""), DomainClass::Other);
        assert_eq!(classify("   "), DomainClass::Other);
        assert_eq!(classify("not a host at all"), DomainClass::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(DomainClass::Directory.to_string(), "directory");
        assert_eq!(DomainClass::Other.to_string(), "other");
    }
}
