use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::atomic::AtomicBool;

use crate::routing::{self, RouteTable};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub access_log_format: String,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub max_body_size: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "localhost")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "hello-httpd/0.1")?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the listen address. The default host is the name
    /// `localhost`, so this goes through `ToSocketAddrs` rather than
    /// `SocketAddr::parse`.
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        let addr_str = format!("{}:{}", self.server.host, self.server.port);
        addr_str
            .to_socket_addrs()
            .map_err(|e| format!("Invalid address '{addr_str}': {e}"))?
            .next()
            .ok_or_else(|| format!("Address '{addr_str}' did not resolve"))
    }
}

/// Shared application state: the loaded configuration and the route
/// table, both immutable after startup.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, String> {
        Ok(Self {
            config: config.clone(),
            routes: routing::default_routes()?,
            cached_access_log: AtomicBool::new(config.logging.access_log),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
                access_log_format: "common".to_string(),
                show_headers: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                server_name: "hello-httpd/0.1".to_string(),
                max_body_size: 10_485_760,
            },
        }
    }

    #[test]
    fn test_localhost_resolves() {
        let cfg = test_config("localhost", 8080);
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_ip_literal_resolves() {
        let cfg = test_config("127.0.0.1", 9000);
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let cfg = test_config("definitely not a host", 8080);
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_app_state_installs_routes() {
        let cfg = test_config("localhost", 8080);
        let state = AppState::new(&cfg).unwrap();
        assert_eq!(state.routes.len(), 2);
    }
}
