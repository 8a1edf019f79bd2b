//! Resolver port — DNS lookups for device addresses.

use std::future::Future;
use std::net::IpAddr;

use roomdup_domain::error::RoomDupError;

/// Forward and reverse name resolution.
pub trait AddressResolver {
    /// Resolve a host name into its addresses.
    fn lookup_ip(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, RoomDupError>> + Send;

    /// Resolve an address back into host names, as returned by DNS
    /// (fully qualified, with the trailing dot).
    fn reverse_lookup(
        &self,
        ip: IpAddr,
    ) -> impl Future<Output = Result<Vec<String>, RoomDupError>> + Send;
}
