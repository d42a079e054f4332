//! Address rewriting for outbound homeserver requests
//!
//! Lets deployments point a public homeserver name at a different network
//! target (e.g. a reverse-proxied `example.org` at `http://localhost:8008`).

mod overwrite;

pub use overwrite::ClientDnsOverwrite;

use url::Url;

/// Transforms a requested URL into the URL that should actually be dialed
pub trait AddressRewriter: Send + Sync {
    fn transform(&self, target: &Url) -> Url;
}

/// Rewriter that leaves every target untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRewriter;

impl AddressRewriter for NoopRewriter {
    fn transform(&self, target: &Url) -> Url {
        target.clone()
    }
}
