//! Configuration loading.
//!
//! Configuration is a small YAML file discovered from (highest priority
//! first): the `--config` CLI flag, the `TODO_WEB_CONFIG_PATH` environment
//! variable, `./todo-web.yaml`, then `~/.todo-web/config.yaml`. A missing
//! file is not an error; defaults apply. Individual fields can be
//! overridden by `TODO_WEB_DB` / `TODO_WEB_PORT` environment variables and
//! by CLI flags, applied in that order after the file is read.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default port for the web server.
pub const DEFAULT_PORT: u16 = 8998;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Address to bind (default: 127.0.0.1).
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port to listen on (default: 8998).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            bind: default_bind(),
            port: default_port(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("todo.db")
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Load configuration, starting from an optional explicit path.
    ///
    /// Returns the config and the path it was read from, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => discover_config_path(),
        };

        let mut config = match &path {
            Some(p) if p.exists() => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read config file {}", p.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("failed to parse config file {}", p.display()))?
            }
            Some(p) if explicit.is_some() => {
                anyhow::bail!("config file not found: {}", p.display());
            }
            _ => Config::default(),
        };

        config.apply_env_overrides();
        Ok((config, path.filter(|p| p.exists())))
    }

    /// Apply `TODO_WEB_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(db) = std::env::var("TODO_WEB_DB") {
            self.server.db_path = PathBuf::from(db);
        }
        if let Ok(port) = std::env::var("TODO_WEB_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!("ignoring non-numeric TODO_WEB_PORT value: {}", port),
            }
        }
    }
}

/// Find a config file on disk: env var, project file, then user file.
fn discover_config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("TODO_WEB_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }

    let project = PathBuf::from("todo-web.yaml");
    if project.exists() {
        return Some(project);
    }

    dirs::home_dir().map(|h| h.join(".todo-web").join("config.yaml"))
}
