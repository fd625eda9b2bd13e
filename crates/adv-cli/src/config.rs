use std::path::Path;
use std::time::Duration;

use adv_server::NodeConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client settings, optionally read from a TOML file. Command-line flags
/// take precedence over file values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub node_url: String,
    pub timeout_secs: u64,
    /// First result position to read.
    pub from: u64,
    /// Settings for `adv serve`.
    pub node: NodeConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            from: 0,
            node: NodeConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Defaults, then the `--config` file, then flags.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(node) = &cli.node {
            config.node_url = node.clone();
        }
        if let Some(secs) = cli.timeout {
            config.timeout_secs = secs;
        }
        Ok(config)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let c = CliConfig::default();
        assert_eq!(c.node_url, "http://127.0.0.1:8080");
        assert_eq!(c.deadline(), Duration::from_secs(30));
        assert_eq!(c.from, 0);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["adv", "state", "--node", "http://x:1", "--timeout", "3"]).unwrap();
        let c = CliConfig::resolve(&cli).unwrap();
        assert_eq!(c.node_url, "http://x:1");
        assert_eq!(c.timeout_secs, 3);
    }

    #[test]
    fn file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adv.toml");
        std::fs::write(
            &path,
            "node_url = \"http://file:2\"\ntimeout_secs = 10\n\n[node]\nbind_addr = \"0.0.0.0:7000\"\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from([
            "adv", "state", "--config", path.to_str().unwrap(), "--timeout", "4",
        ])
        .unwrap();
        let c = CliConfig::resolve(&cli).unwrap();
        assert_eq!(c.node_url, "http://file:2");
        assert_eq!(c.timeout_secs, 4);
        assert_eq!(c.node.bind_addr.port(), 7000);
    }

    #[test]
    fn missing_config_file_is_error() {
        let cli = Cli::try_parse_from(["adv", "state", "--config", "/nonexistent/adv.toml"]).unwrap();
        let err = CliConfig::resolve(&cli).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
