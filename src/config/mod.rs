use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub limits: CatalogLimits,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Bounds applied to agents registered with the catalog
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogLimits {
    /// Maximum number of agents held at once
    #[serde(default = "default_max_agents")]
    pub max_agents: usize,
    /// Maximum number of files plus URLs per agent
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,
    /// Maximum agent name length in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

fn default_max_agents() -> usize {
    1000
}

fn default_max_sources() -> usize {
    100
}

fn default_max_name_length() -> usize {
    200
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            max_agents: default_max_agents(),
            max_sources: default_max_sources(),
            max_name_length: default_max_name_length(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            limits: CatalogLimits::default(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments (config file plus CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        if let Some(host) = &cli.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            settings.server.port = port;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a config file. A missing file yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty");
        }
        if self.limits.max_agents == 0 {
            errors.push("limits.max_agents must be greater than 0");
        }
        if self.limits.max_sources == 0 {
            errors.push("limits.max_sources must be greater than 0");
        }
        if self.limits.max_name_length == 0 {
            errors.push("limits.max_name_length must be greater than 0");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        }
    }
}
