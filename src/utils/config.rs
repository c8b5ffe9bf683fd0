use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("ALLOWED_ORIGINS").ok(),
        )
    }

    pub fn from_parts(
        host: Option<String>,
        port: Option<String>,
        allowed_origins: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let addr_str = format!("{}:{}", host, port);
        let addr: SocketAddr = addr_str.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            value: host,
        })?;

        let allowed_origins = allowed_origins
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            addr,
            allowed_origins,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_max_size: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("DB_POOL_MAX_SIZE").ok(),
        )
    }

    pub fn from_parts(url: Option<String>, pool_max_size: Option<String>) -> Result<Self, ConfigError> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let pool_max_size = match pool_max_size {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DB_POOL_MAX_SIZE",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_POOL_MAX_SIZE,
        };
        Ok(Self { url, pool_max_size })
    }
}
