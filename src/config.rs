use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::options::Options;

/// Which engines a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Kruskal,
    Prim,
    Both,
}

impl FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Selection::Kruskal),
            "prim" => Ok(Selection::Prim),
            "both" => Ok(Selection::Both),
            other => anyhow::bail!("unknown algorithm selection {other:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format {other:?}"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MstConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: Selection,
    /// Prim start node; the graph's first node when unset.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default = "default_output")]
    pub output: OutputFormat,
    /// Treat a spanning forest or partial tree as a failure.
    #[serde(default)]
    pub require_spanning: bool,
    #[serde(default)]
    pub dot: Option<PathBuf>,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            start: None,
            output: default_output(),
            require_spanning: false,
            dot: None,
        }
    }
}

impl MstConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: MstConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Command-line flags win over the file.
    pub fn apply(&mut self, options: &Options) {
        if let Some(algorithm) = options.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(start) = &options.start {
            self.start = Some(start.clone());
        }
        if let Some(output) = options.output {
            self.output = output;
        }
        if options.strict {
            self.require_spanning = true;
        }
        if let Some(dot) = &options.dot {
            self.dot = Some(dot.clone());
        }
    }
}

fn default_algorithm() -> Selection {
    Selection::Both
}

fn default_output() -> OutputFormat {
    OutputFormat::Text
}
