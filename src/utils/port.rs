// SPDX-License-Identifier: GPL-3.0-only
use std::net::{Ipv4Addr, TcpListener};
use tracing::debug;

/// Ask the OS for an unused TCP port.
///
/// The listener is dropped before returning, so another process may grab the
/// port before the server binds it.
pub fn find_free_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    let port = listener.local_addr()?.port();
    drop(listener);

    debug!(port, "Acquired free port");
    Ok(port)
}

/// Whether `port` lies in the host's ephemeral range.
///
/// Linux publishes the range in procfs; elsewhere anything above the
/// privileged ports counts.
#[cfg(test)]
pub(crate) fn is_ephemeral(port: u16) -> bool {
    #[cfg(target_os = "linux")]
    if let Ok(range) = std::fs::read_to_string("/proc/sys/net/ipv4/ip_local_port_range") {
        let bounds: Vec<u16> = range.split_whitespace().filter_map(|b| b.parse().ok()).collect();
        if let [low, high] = bounds[..] {
            return (low..=high).contains(&port);
        }
    }
    port >= 1024
}
