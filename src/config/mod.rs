use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

/// Deployment stage, read from `PERSONA_ENV`. Anything unrecognized falls
/// back to development so a bare checkout runs without setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Runtime settings for the assessment service, read once at startup from
/// `PERSONA_*` environment variables. A local `.env` file is honored.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub listen: ListenConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("PERSONA_ENV", "development"));

        let host = var_or("PERSONA_HOST", "127.0.0.1");
        let raw_port = var_or("PERSONA_PORT", "4000");
        let port = raw_port.parse::<u16>().map_err(|source| ConfigError::Port {
            value: raw_port,
            source,
        })?;

        let directive = var_or("PERSONA_LOG", "info");

        Ok(Self {
            environment,
            listen: ListenConfig { host, port },
            log: LogConfig { directive },
        })
    }
}

fn var_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl ListenConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host.parse().map_err(|source| ConfigError::Host {
                value: self.host.clone(),
                source,
            })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Filter directive handed to the tracing subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub directive: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Port {
        value: String,
        source: ParseIntError,
    },
    Host {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Port { value, .. } => {
                write!(f, "PERSONA_PORT '{}' is not a valid port number", value)
            }
            ConfigError::Host { value, .. } => {
                write!(f, "PERSONA_HOST '{}' is not an IP address or 'localhost'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Port { source, .. } => Some(source),
            ConfigError::Host { source, .. } => Some(source),
        }
    }
}
