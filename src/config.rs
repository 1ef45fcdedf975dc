use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Names of the config keys that must be present, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["graphviz_path", "repo_path", "output_path", "target_file"];

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Graphviz `dot` executable used in the printed render command.
    pub graphviz_path: String,
    /// Working copy whose history is queried.
    pub repo_path: PathBuf,
    /// Where the generated DOT source is written.
    pub output_path: PathBuf,
    /// File inside the repository whose history is graphed.
    pub target_file: String,
}

/// On-disk shape of the config file. Every field is optional here so that
/// all missing keys can be reported at once by `validate`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    graphviz_path: Option<String>,
    repo_path: Option<String>,
    output_path: Option<String>,
    target_file: Option<String>,
}

impl RawConfig {
    fn validate(self) -> Result<Config> {
        let present = [
            self.graphviz_path.is_some(),
            self.repo_path.is_some(),
            self.output_path.is_some(),
            self.target_file.is_some(),
        ];
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();

        match (
            self.graphviz_path,
            self.repo_path,
            self.output_path,
            self.target_file,
        ) {
            (Some(graphviz_path), Some(repo_path), Some(output_path), Some(target_file)) => {
                Ok(Config {
                    graphviz_path,
                    repo_path: PathBuf::from(repo_path),
                    output_path: PathBuf::from(output_path),
                    target_file,
                })
            }
            _ => bail!("Missing required config field(s): {}", missing.join(", ")),
        }
    }
}

impl Config {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(?config, "loaded config");
        Ok(config)
    }

    /// Parse and validate config JSON.
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;
        raw.validate()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
