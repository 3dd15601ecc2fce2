//! Table and opponent settings.
//!
//! Values resolve in layers: built-in defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line flags
//! are applied by the commands on top of the result. Each value remembers the
//! layer it came from so `holdem cfg` can show it.

use std::fs;
use std::str::FromStr;

use holdem_ai::poker_ai::AiConfig;
use holdem_engine::engine::{EngineConfig, MAX_STARTING_STACK};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub aggression: f64,
    pub bluff_frequency: f64,
}

impl Default for Config {
    fn default() -> Self {
        let table = EngineConfig::default();
        let ai = AiConfig::default();
        Self {
            starting_stack: table.starting_stack,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            seed: None,
            aggression: ai.aggression,
            bluff_frequency: ai.bluff_frequency,
        }
    }
}

impl Config {
    pub fn engine_config(&self, seed: Option<u64>) -> EngineConfig {
        EngineConfig {
            starting_stack: self.starting_stack,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            num_decks: 1,
            seed,
        }
    }

    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            aggression: self.aggression,
            bluff_frequency: self.bluff_frequency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub aggression: ValueSource,
    pub bluff_frequency: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            aggression: ValueSource::Default,
            bluff_frequency: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            let s = fs::read_to_string(path)?;
            let f: FileConfig = toml::from_str(&s)?;
            if let Some(v) = f.starting_stack {
                cfg.starting_stack = v;
                sources.starting_stack = ValueSource::File;
            }
            if let Some(v) = f.small_blind {
                cfg.small_blind = v;
                sources.small_blind = ValueSource::File;
            }
            if let Some(v) = f.big_blind {
                cfg.big_blind = v;
                sources.big_blind = ValueSource::File;
            }
            if let Some(v) = f.seed {
                cfg.seed = Some(v);
                sources.seed = ValueSource::File;
            }
            if let Some(v) = f.aggression {
                cfg.aggression = v;
                sources.aggression = ValueSource::File;
            }
            if let Some(v) = f.bluff_frequency {
                cfg.bluff_frequency = v;
                sources.bluff_frequency = ValueSource::File;
            }
        }
    }

    if let Some(v) = env_override("HOLDEM_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_override("HOLDEM_STARTING_STACK")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_override("HOLDEM_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_override("HOLDEM_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_override("HOLDEM_AGGRESSION")? {
        cfg.aggression = v;
        sources.aggression = ValueSource::Env;
    }
    if let Some(v) = env_override("HOLDEM_BLUFF_FREQUENCY")? {
        cfg.bluff_frequency = v;
        sources.bluff_frequency = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    aggression: Option<f64>,
    #[serde(default)]
    bluff_frequency: Option<f64>,
}

// Unset and empty variables both mean "no override".
fn env_override<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", key, raw))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 || cfg.starting_stack > MAX_STARTING_STACK {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack must be within 1..={}",
            MAX_STARTING_STACK
        )));
    }
    if cfg.small_blind == 0 || cfg.small_blind >= cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blinds must satisfy 0 < small_blind < big_blind".into(),
        ));
    }
    for (name, p) in [
        ("aggression", cfg.aggression),
        ("bluff_frequency", cfg.bluff_frequency),
    ] {
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {} must be within [0, 1]",
                name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_table() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_stack, 1_000);
        assert_eq!((cfg.small_blind, cfg.big_blind), (10, 20));
        assert_eq!(cfg.aggression, 0.6);
        assert_eq!(cfg.bluff_frequency, 0.4);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn validate_rejects_inverted_blinds() {
        let cfg = Config {
            small_blind: 20,
            big_blind: 20,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_bounds_starting_stack() {
        for bad in [0, MAX_STARTING_STACK + 1, 3_000_000_000] {
            let cfg = Config {
                starting_stack: bad,
                ..Config::default()
            };
            assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))), "{}", bad);
        }
        let cfg = Config {
            starting_stack: MAX_STARTING_STACK,
            ..Config::default()
        };
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_probability() {
        let cfg = Config {
            bluff_frequency: 1.5,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        let parsed: Result<FileConfig, _> = toml::from_str("level = 3\n");
        assert!(parsed.is_err());
        let parsed: FileConfig = toml::from_str("big_blind = 50\n").unwrap();
        assert_eq!(parsed.big_blind, Some(50));
    }
}
