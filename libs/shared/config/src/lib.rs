use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("CLINIC_API_HOST")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| {
                warn!("CLINIC_API_HOST not set or invalid, binding all interfaces");
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            });

        let port = env::var("CLINIC_API_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| {
                warn!("CLINIC_API_PORT not set or invalid, using default port 3000");
                3000
            });

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
