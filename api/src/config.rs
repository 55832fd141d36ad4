use crate::Result;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:8080",
];

/// Server configuration.
#[derive(Debug)]
pub struct Config {
    /// Address to listen on. By default this is 0.0.0.0:8000.
    pub address: SocketAddr,
    /// Origins allowed to call the service from a browser.
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize)]
struct Serialized {
    #[serde(default)]
    address: Option<SocketAddr>,
    #[serde(default)]
    allowed_origins: Option<Vec<String>>,
}

fn default_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_origins() -> Vec<String> {
    DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: default_address(),
            allowed_origins: default_origins(),
        }
    }
}

impl Config {
    /// Read from cooked.toml or return some defaults.
    pub fn new() -> Result<Self> {
        let path = PathBuf::from("cooked.toml");

        if path.exists() && path.is_file() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    fn from_toml(content: &str) -> Result<Self> {
        let config: Serialized = toml::from_str(content)?;

        Ok(Self {
            address: config.address.unwrap_or_else(default_address),
            allowed_origins: config.allowed_origins.unwrap_or_else(default_origins),
        })
    }
}
