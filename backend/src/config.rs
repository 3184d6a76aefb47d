//! Server configuration.
//!
//! Values are resolved in three layers, later ones winning:
//! built-in defaults, an optional TOML file, then environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default directory for the client bundle.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Config file looked up in the working directory when `RAASI_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "raasi.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidEnv {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Resolved HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// On-disk layout; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerSection {
    host: Option<IpAddr>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration the way the server binary does.
    ///
    /// # Environment Variables
    /// - `RAASI_CONFIG` (optional): path to a TOML file; otherwise `raasi.toml`
    ///   is used if it exists in the working directory
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 5000)
    /// - `STATIC_DIR` (optional, default: public)
    ///
    /// # Errors
    /// Returns an error if the config file is unreadable or malformed, or if
    /// an environment variable does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("RAASI_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults overlaid with the values of a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            host: file.server.host.unwrap_or(defaults.host),
            port: file.server.port.unwrap_or(defaults.port),
            static_dir: file.server.static_dir.unwrap_or(defaults.static_dir),
        })
    }

    /// Overlay `HOST`, `PORT` and `STATIC_DIR` when set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "HOST",
                expected: "IP address",
                value: host.clone(),
            })?;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT",
                expected: "port number",
                value: port.clone(),
            })?;
        }
        if let Ok(dir) = env::var("STATIC_DIR") {
            if !dir.is_empty() {
                self.static_dir = PathBuf::from(dir);
            }
        }
        Ok(())
    }

    /// Address to bind the listener to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
