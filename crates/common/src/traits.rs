//! Core traits for scanner components

use async_trait::async_trait;
use std::net::IpAddr;

/// Port liveness check. Every failure mode collapses to `false`.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Whether `ip:port` accepted a connection.
    async fn is_open(&self, ip: IpAddr, port: u16) -> bool;

    /// Prober name/identifier
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::sync::Arc;

    struct EvenPorts;

    #[async_trait]
    impl Prober for EvenPorts {
        async fn is_open(&self, _ip: IpAddr, port: u16) -> bool {
            port % 2 == 0
        }

        fn name(&self) -> &str {
            "even"
        }
    }

    #[tokio::test]
    async fn prober_is_object_safe() {
        let prober: Arc<dyn Prober> = Arc::new(EvenPorts);
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert!(prober.is_open(ip, 80).await);
        assert!(!prober.is_open(ip, 81).await);
        assert_eq!(prober.name(), "even");
    }
}
