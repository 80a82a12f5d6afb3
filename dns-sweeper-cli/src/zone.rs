//! Zone name selection

use std::fmt;

/// Where the zone name for a hostname comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSource {
    /// One configured zone for the whole run
    Fixed(String),
    /// Last two labels of each hostname, looked up again for every hostname
    DerivedFromHostname,
}

impl ZoneSource {
    /// Zone name to resolve for `hostname`.
    pub fn zone_name_for(&self, hostname: &str) -> String {
        match self {
            Self::Fixed(zone_name) => zone_name.clone(),
            Self::DerivedFromHostname => derive_zone_name(hostname),
        }
    }
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(zone_name) => write!(f, "{zone_name}"),
            Self::DerivedFromHostname => write!(f, "<derived from hostname>"),
        }
    }
}

/// Zone name as the last two dot-separated labels of `hostname`.
///
/// `sub.example.com` gives `example.com`. Multi-label public suffixes are not
/// recognised: `www.sub.example.co.uk` gives `co.uk`. A trailing root dot is
/// ignored and names with fewer than two labels are returned as-is.
pub fn derive_zone_name(hostname: &str) -> String {
    let name = hostname.trim_end_matches('.');
    let labels: Vec<&str> = name.rsplitn(3, '.').collect();

    match labels.as_slice() {
        [tld, sld, ..] => format!("{sld}.{tld}"),
        _ => name.to_string(),
    }
}
