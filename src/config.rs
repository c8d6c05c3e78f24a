//! Configuration lue dans l'environnement (et dans un éventuel fichier `.env`)

use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;
use thiserror::Error;

use crate::consts::{DEFAULT_LOG_FILE, LOG_FILE_VAR, LOG_LEVEL_VAR};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Niveau de log invalide dans {var}: {value}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Charge `.env` s'il existe, puis lit les variables `JAUGE_*`
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Construit la configuration à partir d'une fonction de recherche
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|path| !path.is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = LevelFilter::from_str(level.trim()).map_err(|_| {
                ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: level.clone(),
                }
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_file, PathBuf::from("./jauge.log"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_in(&[
            ("JAUGE_LOG_FILE", "/tmp/form.log"),
            ("JAUGE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.log_file, PathBuf::from("/tmp/form.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_level() {
        let result = Config::from_lookup(lookup_in(&[("JAUGE_LOG_LEVEL", "loud")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidLogLevel {
                var: "JAUGE_LOG_LEVEL",
                value: "loud".to_string(),
            })
        );
    }
}
