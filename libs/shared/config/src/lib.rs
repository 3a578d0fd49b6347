use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_SERVER_NAME: &str = "MEDAi Prototype";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
    pub server_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match env::var("MEDAI_HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("MEDAI_HOST '{}' is not an IP address, using {}", raw, defaults.host);
                defaults.host
            }),
            Err(_) => {
                warn!("MEDAI_HOST not set, using {}", defaults.host);
                defaults.host
            }
        };

        let port = match env::var("MEDAI_PORT") {
            Ok(raw) => parse_port(&raw).unwrap_or_else(|| {
                warn!("MEDAI_PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => {
                warn!("MEDAI_PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let public_dir = env::var("MEDAI_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                warn!("MEDAI_PUBLIC_DIR not set, using default '{}'", DEFAULT_PUBLIC_DIR);
                defaults.public_dir.clone()
            });

        let server_name = env::var("MEDAI_SERVER_NAME")
            .unwrap_or_else(|_| {
                warn!("MEDAI_SERVER_NAME not set, using default");
                defaults.server_name.clone()
            });

        let config = Self {
            host,
            port,
            public_dir,
            server_name,
        };

        if !config.has_public_dir() {
            warn!("Public asset directory {} does not exist - static pages will 404", config.public_dir.display());
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn has_public_dir(&self) -> bool {
        self.public_dir.is_dir()
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_prototype() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.server_name, "MEDAi Prototype");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn port_parsing_rejects_garbage() {
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port(" 3001 "), Some(3001));
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("70000"), None);
        assert_eq!(parse_port("abc"), None);
    }
}
