//! Host-based rewrite table built from `dns.overwrite.homeserver.client`

use super::AddressRewriter;
use crate::config::DnsOverwriteEntry;
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use tracing::{debug, info};
use url::Url;

/// Rewrites the scheme, host and port of targets whose host is listed
#[derive(Debug, Clone, Default)]
pub struct ClientDnsOverwrite {
    /// Lowercased host name -> replacement base URL
    mappings: HashMap<String, Url>,
}

impl ClientDnsOverwrite {
    pub fn new(entries: &[DnsOverwriteEntry]) -> Result<Self> {
        let mut mappings = HashMap::new();

        for entry in entries {
            let value = Url::parse(&entry.value)
                .with_context(|| format!("Invalid DNS overwrite value for {}", entry.name))?;
            if !matches!(value.scheme(), "http" | "https") {
                return Err(anyhow!(
                    "DNS overwrite value for {} must be an http(s) URL: {}",
                    entry.name,
                    entry.value
                ));
            }
            if value.host_str().is_none() {
                return Err(anyhow!(
                    "DNS overwrite value for {} has no host: {}",
                    entry.name,
                    entry.value
                ));
            }

            info!("DNS overwrite: {} -> {}", entry.name, value);
            mappings.insert(entry.name.to_lowercase(), value);
        }

        Ok(Self { mappings })
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl AddressRewriter for ClientDnsOverwrite {
    fn transform(&self, target: &Url) -> Url {
        let mut url = target.clone();

        let Some(host) = target.host_str() else {
            return url;
        };
        let Some(replacement) = self.mappings.get(&host.to_lowercase()) else {
            return url;
        };

        // Replacements are http(s) with a host, so the setters only fail
        // for targets that are not http(s) themselves.
        let rewritten = url.set_scheme(replacement.scheme()).is_ok()
            && url.set_host(replacement.host_str()).is_ok()
            && url.set_port(replacement.port()).is_ok();

        if rewritten {
            debug!("Rewrote {} to {}", target, url);
            url
        } else {
            target.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> DnsOverwriteEntry {
        DnsOverwriteEntry {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_rewrites_matching_host() {
        let dns = ClientDnsOverwrite::new(&[entry("example.org", "http://localhost:8008")]).unwrap();
        let target =
            Url::parse("https://example.org/_matrix/client/r0/user_directory/search").unwrap();

        let url = dns.transform(&target);
        assert_eq!(
            url.as_str(),
            "http://localhost:8008/_matrix/client/r0/user_directory/search"
        );
    }

    #[test]
    fn test_host_match_is_case_insensitive() {
        let dns = ClientDnsOverwrite::new(&[entry("Example.ORG", "http://10.0.0.1:8008")]).unwrap();
        let target = Url::parse("https://example.org/path?x=1").unwrap();

        assert_eq!(dns.transform(&target).as_str(), "http://10.0.0.1:8008/path?x=1");
    }

    #[test]
    fn test_default_port_of_replacement() {
        let dns = ClientDnsOverwrite::new(&[entry("example.org", "https://matrix.internal")]).unwrap();
        let target = Url::parse("http://example.org:8448/p").unwrap();

        assert_eq!(dns.transform(&target).as_str(), "https://matrix.internal/p");
    }

    #[test]
    fn test_unmatched_host_untouched() {
        let dns = ClientDnsOverwrite::new(&[entry("example.org", "http://localhost:8008")]).unwrap();
        let target = Url::parse("https://other.org/p").unwrap();

        assert_eq!(dns.transform(&target), target);
    }

    #[test]
    fn test_invalid_value_rejected() {
        assert!(ClientDnsOverwrite::new(&[entry("example.org", "not a url")]).is_err());
        assert!(ClientDnsOverwrite::new(&[entry("example.org", "mailto:a@b.c")]).is_err());
    }

    #[test]
    fn test_non_http_value_rejected() {
        let err = ClientDnsOverwrite::new(&[entry("example.org", "foo://matrix.internal:8008")])
            .unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }
}
