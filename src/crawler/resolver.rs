//! Host resolution
//!
//! Maps a URL's host to a numeric address. Every call performs a fresh
//! lookup; nothing is cached between pages.

use crate::url::extract_host;
use std::future::Future;
use std::net::IpAddr;
use thiserror::Error;

/// Errors raised while resolving a URL's host
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("No host in URL {url}")]
    MissingHost { url: String },

    #[error("Lookup failed for {host}: {source}")]
    Lookup {
        host: String,
        source: std::io::Error,
    },

    #[error("No address found for {host}")]
    NoAddress { host: String },
}

/// Resolves the host of a URL to a numeric address
pub trait Resolver {
    /// Resolves the host part of `url`
    ///
    /// # Arguments
    ///
    /// * `url` - The page URL; the host is extracted with [`extract_host`]
    ///
    /// # Returns
    ///
    /// * `Ok(IpAddr)` - The address to record for the page
    /// * `Err(ResolutionError)` - The host could not be parsed or looked up
    fn resolve<'a>(
        &'a self,
        url: &'a str,
    ) -> impl Future<Output = Result<IpAddr, ResolutionError>> + Send + 'a;
}

/// Resolver backed by the system's name lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for DnsResolver {
    fn resolve<'a>(
        &'a self,
        url: &'a str,
    ) -> impl Future<Output = Result<IpAddr, ResolutionError>> + Send + 'a {
        async move {
            let host = extract_host(url).ok_or_else(|| ResolutionError::MissingHost {
                url: url.to_string(),
            })?;
            lookup(host).await
        }
    }
}

/// Looks up a host, preferring IPv4 addresses
async fn lookup(host: &str) -> Result<IpAddr, ResolutionError> {
    let target = if has_port(host) {
        host.to_string()
    } else {
        format!("{}:0", host)
    };

    let addrs: Vec<IpAddr> = tokio::net::lookup_host(target)
        .await
        .map_err(|source| ResolutionError::Lookup {
            host: host.to_string(),
            source,
        })?
        .map(|addr| addr.ip())
        .collect();

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| ResolutionError::NoAddress {
            host: host.to_string(),
        })
}

/// Returns true if the host ends in an explicit `:port`
fn has_port(host: &str) -> bool {
    match host.rfind(':') {
        Some(idx) => {
            let port = &host[idx + 1..];
            let before = &host[..idx];
            !port.is_empty()
                && port.chars().all(|c| c.is_ascii_digit())
                && (!before.starts_with('[') || before.ends_with(']'))
        }
        None => false,
    }
}
