use std::{env, fs, io::ErrorKind, path::Path};

use log::info;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "PROFILE_FORM_CONFIG";
pub const HOST_VAR: &str = "PROFILE_FORM_HOST";
pub const PORT_VAR: &str = "PROFILE_FORM_PORT";
const DEFAULT_CONFIG_PATH: &str = "config.json";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Could not parse config file: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Environment variable {0} has invalid port value '{1}'")]
    InvalidPort(&'static str, String),
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_host() -> String { String::from("0.0.0.0") }
fn default_port() -> u16 { 3000 }

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Loads the file named by `PROFILE_FORM_CONFIG` (or `config.json`),
    /// then applies host/port environment overrides.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(env::var(HOST_VAR).ok(), env::var(PORT_VAR).ok())?;
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(Error::ReadError(path.display().to_string(), e)),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str::<Config>(contents)?)
    }

    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port.parse()
                .map_err(|_| Error::InvalidPort(PORT_VAR, port.clone()))?;
        }
        Ok(())
    }
}
