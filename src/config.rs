//! Settings read from an optional YAML file. Every field has a default, so an empty file (or no
//! file at all) gives the default configuration.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::chess::{CastlingRule, DEFAULT_SEED};
use crate::engine::Generator;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Top level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging settings
    pub log: LogConfig,
    /// Seed for the position hash keys
    pub zobrist_seed: u64,
    /// Whether capturing a rook on its corner revokes castling rights
    pub castling_rule: RuleChoice,
    /// Which move generator the engine uses
    pub generator: Generator,
    /// Fraction of the remaining clock spent on each move
    pub time_divisor: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: LogConfig::default(),
            zobrist_seed: DEFAULT_SEED,
            castling_rule: RuleChoice::default(),
            generator: Generator::default(),
            time_divisor: 20,
        }
    }
}

impl Config {
    /// Reads the configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_yaml_str(&s)
    }

    /// Parses the configuration from YAML text
    pub fn from_yaml_str(s: &str) -> Result<Config, ConfigError> {
        if s.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Logs even without `--log`
    pub enabled: bool,
    /// One of `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub level: String,
    /// Directory for timestamped log files
    pub dir: PathBuf,
    /// Most log files kept in `dir`, counting the new one
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            enabled: false,
            level: "info".to_string(),
            dir: PathBuf::from("logs"),
            max_files: 5,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Castling rule as named in the config file
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleChoice {
    /// Rights are revoked only when the king or rook moves
    Source,
    /// Capturing a rook on its corner also revokes the right
    Standard,
}

impl Default for RuleChoice {
    fn default() -> Self {
        RuleChoice::Source
    }
}

impl From<RuleChoice> for CastlingRule {
    fn from(choice: RuleChoice) -> CastlingRule {
        match choice {
            RuleChoice::Source => CastlingRule::Source,
            RuleChoice::Standard => CastlingRule::Standard,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The configuration could not be loaded
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(PathBuf, std::io::Error),
    /// The contents are not valid
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, err) => write!(f, "{}: {}", path.display(), err),
            ConfigError::Yaml(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError { }

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}
