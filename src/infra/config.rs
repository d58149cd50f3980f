// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::types::MetricType;
use crate::infra::errors::JudgeError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grader: GraderConfig,

    #[serde(default)]
    pub runner: RunnerConfig,
}

/// `[grader]` section. `metric_type` stays a string here and is validated
/// when a grader is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraderConfig {
    #[serde(default = "default_metric_type")]
    pub metric_type: String,
    #[serde(default)]
    pub match_arguments: bool,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            metric_type: default_metric_type(),
            match_arguments: false,
        }
    }
}

fn default_metric_type() -> String {
    MetricType::default().as_str().into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_max_concurrency() -> usize {
    32
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, JudgeError> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, JudgeError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.runner.max_concurrency == 0 {
            return Err(JudgeError::Config(
                "runner.max_concurrency must be at least 1".into(),
            ));
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
