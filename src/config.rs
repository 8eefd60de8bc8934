// src/config.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuizMemeError, Result};
use crate::quiz::session::{QUESTION_TIME_LIMIT_MS, SessionSettings, TICK_STEP_MS};

pub const DEFAULT_CONFIG_PATH: &str = "./quizmeme.yaml";

/// Runtime configuration. Every field has a default, so an empty (or
/// missing) YAML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The state document (completed quizzes + streak).
    pub state_path: PathBuf,
    pub log_dir: PathBuf,
    /// JSON pack list replacing the bundled week of packs.
    pub catalog_path: Option<PathBuf>,
    pub question_time_limit_ms: u64,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("./data/quizmeme-state.json"),
            log_dir: PathBuf::from("./logs"),
            catalog_path: None,
            question_time_limit_ms: QUESTION_TIME_LIMIT_MS,
            tick_ms: TICK_STEP_MS,
        }
    }
}

impl AppConfig {
    /// Defaults, then the YAML file (`QUIZMEME_CONFIG` or
    /// `./quizmeme.yaml` when present), then environment overrides.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var("QUIZMEME_CONFIG").ok().map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::from_yaml_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_yaml_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("QUIZMEME_STATE_PATH") {
            self.state_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("QUIZMEME_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(catalog) = lookup("QUIZMEME_CATALOG") {
            self.catalog_path = Some(PathBuf::from(catalog));
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(QuizMemeError::ConfigError("tick_ms must be greater than zero".to_string()));
        }
        if self.question_time_limit_ms < self.tick_ms {
            return Err(QuizMemeError::ConfigError(format!(
                "question_time_limit_ms ({}) is shorter than one tick ({} ms)",
                self.question_time_limit_ms, self.tick_ms
            )));
        }
        Ok(())
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            question_time_limit_ms: self.question_time_limit_ms,
            tick_ms: self.tick_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml_str("question_time_limit_ms: 20000\ncatalog_path: packs.json\n").unwrap();

        assert_eq!(config.question_time_limit_ms, 20_000);
        assert_eq!(config.catalog_path, Some(PathBuf::from("packs.json")));
        assert_eq!(config.tick_ms, TICK_STEP_MS);
        assert_eq!(config.state_path, AppConfig::default().state_path);
        assert_eq!(config.session_settings().question_time_limit_ms, 20_000);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let result = AppConfig::from_yaml_str("tick_ms: [not, a, number]");
        assert!(matches!(result, Err(QuizMemeError::YamlError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("QUIZMEME_STATE_PATH", "/tmp/state.json"),
            ("QUIZMEME_CATALOG", "/tmp/packs.json"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.state_path, PathBuf::from("/tmp/state.json"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/packs.json")));
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_validate_rejects_bad_timing() {
        let zero_tick = AppConfig { tick_ms: 0, ..AppConfig::default() };
        assert!(zero_tick.validate().is_err());

        let short_limit = AppConfig { question_time_limit_ms: 50, ..AppConfig::default() };
        assert!(short_limit.validate().is_err());

        assert!(AppConfig::default().validate().is_ok());
    }
}
