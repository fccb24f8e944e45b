use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

use crate::pipeline::Dialect;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// `issue.footer` from the bundled config, so a file that leaves out
/// `[issue]` still gets the contribution footer.
static BUNDLED_FOOTER: LazyLock<String> = LazyLock::new(|| {
    DEFAULT_CONFIG
        .parse::<toml::Table>()
        .ok()
        .and_then(|table| {
            table
                .get("issue")?
                .get("footer")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| "JIRA: {{TICKET}}".to_string())
});

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub converter: ConverterConfig,
    pub issue: IssueConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConverterConfig {
    pub dialect: Dialect,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IssueConfig {
    /// Appended to every issue body; `{{TICKET}}` is replaced by the Jira key.
    pub footer: String,
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            footer: BUNDLED_FOOTER.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub tables: bool,
    pub strikethrough: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
        }
    }
}

impl Config {
    /// The configuration bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if not found.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
