//! Best-effort address resolution for duplicated devices.

use std::net::IpAddr;

use roomdup_domain::device::UNRESOLVED_ADDRESS;

use crate::ports::AddressResolver;

/// Resolve `name` into the address a device should be stored with.
///
/// Never fails: a failed or empty forward lookup yields
/// [`UNRESOLVED_ADDRESS`], a failed reverse lookup yields the first
/// forward address, and a successful one yields the first host name
/// without its trailing dot.
pub async fn resolve_address<N: AddressResolver>(resolver: &N, name: &str) -> String {
    tracing::debug!(%name, "looking up address");

    let ip = match resolver.lookup_ip(name).await {
        Ok(addresses) => addresses.first().copied(),
        Err(err) => {
            tracing::warn!(%err, %name, "address not in DNS, using fallback");
            return UNRESOLVED_ADDRESS.to_string();
        }
    };
    let Some(ip) = ip else {
        tracing::warn!(%name, "DNS returned no address, using fallback");
        return UNRESOLVED_ADDRESS.to_string();
    };

    reverse_name(resolver, name, ip).await
}

async fn reverse_name<N: AddressResolver>(resolver: &N, name: &str, ip: IpAddr) -> String {
    match resolver.reverse_lookup(ip).await {
        Ok(hosts) => match hosts.first() {
            Some(host) => strip_root_dot(host).to_string(),
            None => {
                tracing::warn!(%name, %ip, "no DNS name for address");
                ip.to_string()
            }
        },
        Err(err) => {
            tracing::warn!(%err, %name, %ip, "issue finding DNS name");
            ip.to_string()
        }
    }
}

fn strip_root_dot(host: &str) -> &str {
    host.strip_suffix('.').unwrap_or(host)
}
