//! Port copy — re-creates the ports of duplicated devices against their copies.

use roomdup_domain::mapping::DeviceIdMapping;

use crate::ports::PortRepository;

/// Outcome counters of a [`copy_ports`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortCopyReport {
    /// Ports persisted against a new host.
    pub created: usize,
    /// Ports the store refused to persist.
    pub failed: usize,
    /// Source devices whose ports could not be listed.
    pub unlisted_hosts: usize,
}

/// Copy every port hosted by a mapped device onto the device's copy.
///
/// Each port is persisted once with its host replaced and its source and
/// destination rewritten through `mapping` (see
/// [`Port::remapped`](roomdup_domain::port::Port::remapped)). Failures are
/// logged and counted; they never stop the pass.
pub async fn copy_ports<P: PortRepository>(store: &P, mapping: &DeviceIdMapping) -> PortCopyReport {
    tracing::info!(devices = mapping.len(), "starting port mapping");
    for (old, new) in mapping.iter() {
        tracing::info!(%old, %new, "device mapping");
    }

    let mut report = PortCopyReport::default();
    for (old, new) in mapping.iter() {
        let ports = match store.list_ports_by_host(old).await {
            Ok(ports) => ports,
            Err(err) => {
                tracing::error!(%err, device_id = %old, "could not get ports for device");
                report.unlisted_hosts += 1;
                continue;
            }
        };
        if ports.is_empty() {
            tracing::info!(device_id = %old, "no ports for device");
            continue;
        }

        for port in &ports {
            let copy = port.remapped(new, mapping);
            tracing::debug!(port = ?copy, "adding port");
            match store.create_port(copy).await {
                Ok(_) => report.created += 1,
                Err(err) => {
                    tracing::error!(%err, port = %port.name, host = %new, "error adding port");
                    report.failed += 1;
                }
            }
        }
    }

    tracing::info!(
        created = report.created,
        failed = report.failed,
        "done doing port mapping"
    );
    report
}
