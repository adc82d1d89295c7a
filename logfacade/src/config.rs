//! Logger configuration
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


use crate::level::Severity;
use std::fmt;
use std::path::{Path, PathBuf};

/// Record encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingFormat {
    /// One JSON object per line (for production)
    #[default]
    Json,
    /// Tab separated plain text (for development)
    Console,
}

impl EncodingFormat {
    /// Map a format name to an encoding.
    ///
    /// `"console"` selects plain text; `"json"` and anything unrecognized
    /// select JSON.
    pub fn from_name(name: &str) -> Self {
        match name {
            "console" => EncodingFormat::Console,
            _ => EncodingFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EncodingFormat::Json => "json",
            EncodingFormat::Console => "console",
        }
    }
}

impl fmt::Display for EncodingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where encoded records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Destination {
    /// Resolve a configured path; `"stdout"` and `"stderr"` name the process streams
    pub fn from_path(path: &Path) -> Self {
        match path.to_str() {
            Some("stdout") => Destination::Stdout,
            Some("stderr") => Destination::Stderr,
            _ => Destination::File(path.to_path_buf()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::Stderr => f.write_str("stderr"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything needed to build a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub format: EncodingFormat,
    pub file_path: PathBuf,
    /// Also write every record to standard output
    pub echo_to_terminal: bool,
    /// Records below this severity are dropped
    pub level: Severity,
    /// Attach a `stacktrace` field to records at `Warn` and above
    pub development: bool,
}

impl LoggerConfig {
    /// Build a configuration from the four raw values a host application
    /// usually carries around.
    ///
    /// Unrecognized `format` or `level` names fall back to `"json"` and
    /// `"info"`.
    ///
    /// # Example
    /// ```
    /// use logfacade::{EncodingFormat, LoggerConfig, Severity};
    ///
    /// let config = LoggerConfig::new("console", "app.log", true, "debug");
    /// assert_eq!(config.format, EncodingFormat::Console);
    /// assert_eq!(config.level, Severity::Debug);
    /// ```
    pub fn new(
        format: &str,
        file_path: impl Into<PathBuf>,
        echo_to_terminal: bool,
        level: &str,
    ) -> Self {
        Self {
            format: EncodingFormat::from_name(format),
            file_path: file_path.into(),
            echo_to_terminal,
            level: Severity::from_name(level),
            development: false,
        }
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    /// Destinations in write order: the terminal first when echoing, then the file
    pub fn destinations(&self) -> Vec<Destination> {
        let file = Destination::from_path(&self.file_path);
        if self.echo_to_terminal {
            vec![Destination::Stdout, file]
        } else {
            vec![file]
        }
    }
}
