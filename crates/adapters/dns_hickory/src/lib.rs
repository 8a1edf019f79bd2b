//! # roomdup-adapter-dns-hickory
//!
//! DNS adapter backed by [hickory-resolver](https://docs.rs/hickory-resolver).
//!
//! ## Responsibilities
//! - Implement the `AddressResolver` port defined in `roomdup-app::ports::resolver`
//! - Load the resolver configuration of the host (`/etc/resolv.conf` & co.)
//!
//! Lookups use the resolver's own timeouts; nothing is retried here.
//!
//! ## Dependency rule
//! Depends on `roomdup-app` (for port traits) and `roomdup-domain` (for domain types).

mod error;

pub use error::ResolverError;

use std::future::Future;
use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;

use roomdup_app::ports::AddressResolver;
use roomdup_domain::error::RoomDupError;

/// Address resolver talking to DNS through hickory.
#[derive(Clone)]
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    /// Build a resolver from the host's system configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::SystemConfig`] if the system configuration
    /// cannot be read.
    pub fn from_system_conf() -> Result<Self, ResolverError> {
        let inner = TokioAsyncResolver::tokio_from_system_conf().map_err(ResolverError::SystemConfig)?;
        Ok(Self { inner })
    }
}

impl AddressResolver for HickoryResolver {
    fn lookup_ip(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, RoomDupError>> + Send {
        let resolver = self.inner.clone();
        let name = name.to_string();
        async move {
            let lookup = resolver
                .lookup_ip(name.as_str())
                .await
                .map_err(|err| ResolverError::Lookup { name, source: err })?;
            Ok(lookup.iter().collect())
        }
    }

    fn reverse_lookup(
        &self,
        ip: IpAddr,
    ) -> impl Future<Output = Result<Vec<String>, RoomDupError>> + Send {
        let resolver = self.inner.clone();
        async move {
            let lookup = resolver
                .reverse_lookup(ip)
                .await
                .map_err(|err| ResolverError::Lookup {
                    name: ip.to_string(),
                    source: err,
                })?;
            let names: Vec<String> = lookup.iter().map(ToString::to_string).collect();
            tracing::debug!(%ip, ?names, "reverse lookup");
            Ok(names)
        }
    }
}
