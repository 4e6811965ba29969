use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Synchronous reachability check consulted before every refresh. Pure query;
/// the retry prompt on failure belongs to the caller.
pub trait ConnectivityProbe {
    fn is_connected(&self) -> bool;
}

/// Probes the API host by opening a TCP connection to port 443.
pub struct TcpProbe {
    host: String,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl ConnectivityProbe for TcpProbe {
    fn is_connected(&self) -> bool {
        let authority = format!("{}:443", self.host);
        let addrs = match authority.to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(err) => {
                log::debug!("Connectivity probe failed to resolve {}: {}", authority, err);
                return false;
            }
        };

        for addr in addrs {
            if TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok() {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
pub struct FixedProbe(pub bool);

#[cfg(test)]
impl ConnectivityProbe for FixedProbe {
    fn is_connected(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_host_reports_offline() {
        let probe = TcpProbe::new("host.invalid");
        assert!(!probe.is_connected());
    }
}
