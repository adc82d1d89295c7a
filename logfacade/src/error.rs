//! Error types for the logging facade
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


use std::path::PathBuf;
use thiserror::Error;

/// Logging facade errors
#[derive(Error, Debug)]
pub enum LogError {
    /// A destination could not be opened while building the logger
    #[error("Failed to open log destination {}: {source}", path.display())]
    OpenDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Buffered output could not be flushed to a destination
    #[error("Failed to flush log destination {destination}: {source}")]
    Flush {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// Another global `tracing` subscriber is already installed
    #[error("Failed to install tracing subscriber: {0}")]
    TracingInstall(#[from] tracing_subscriber::util::TryInitError),
}

/// Result type for logging facade operations
pub type LogResult<T> = Result<T, LogError>;
