//! Configuration management for the logging facade
// Copyright 2025 Francisco F. Pinochet
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use config::{Config, ConfigError, Environment, File};
use logfacade::LoggerConfig;
use serde::Deserialize;
use std::path::Path;

/// Environment prefix: `LOG_FORMAT`, `LOG_FILE`, `LOG_TERMINAL`, `LOG_LEVEL`, `LOG_DEVELOPMENT`
pub const ENV_PREFIX: &str = "LOG";

/// Logging settings as written by operators
///
/// Names are kept as text; unrecognized format or level names fall back to
/// `json` and `info` when turned into a [`LoggerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `"json"` or `"console"`
    pub format: String,
    /// Log file path (`"stdout"`/`"stderr"` address the process streams)
    pub file: String,
    /// Echo records to standard output
    pub terminal: bool,
    /// `"debug"`, `"info"`, `"warn"` or `"error"`
    pub level: String,
    pub development: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            file: "logger.log".to_string(),
            terminal: false,
            level: "info".to_string(),
            development: false,
        }
    }
}

impl LoggingSettings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load settings from an optional file, then apply environment overrides.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// The file format is picked from its extension (TOML, YAML, JSON, ...).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Like [`LoggingSettings::load`] with a custom environment prefix, without reading `.env`
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(prefix).try_parsing(true));

        Self::from_config(builder.build()?)
    }

    /// Deserialize settings from an already assembled configuration
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }

    /// Logger configuration for these settings
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::new(&self.format, &self.file, self.terminal, &self.level)
            .with_development(self.development)
    }
}
