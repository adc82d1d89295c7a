//! Process-wide logger
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


use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::logger::{Logger, LoggerBuilder};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Initialize the process-wide logger once.
///
/// The first successful call builds the logger; every later call ignores its
/// configuration and returns the same handle. Concurrent first calls block
/// until exactly one of them has finished building.
///
/// A build failure leaves the global uninitialized and is returned to the
/// caller; hosts should treat it as a start-up abort.
pub fn init(config: LoggerConfig) -> LogResult<&'static Logger> {
    GLOBAL.get_or_try_init(|| Logger::new(config))
}

/// Like [`init`], but building from a prepared [`LoggerBuilder`]
pub fn init_with(builder: LoggerBuilder) -> LogResult<&'static Logger> {
    GLOBAL.get_or_try_init(|| builder.build())
}

/// Initialize from the four raw values most hosts carry around.
///
/// # Example
/// ```no_run
/// let log = logfacade::init_from_parts("json", "logger.log", true, "debug")?;
/// log.info("Server started", &[]);
/// # Ok::<(), logfacade::LogError>(())
/// ```
pub fn init_from_parts(
    format: &str,
    file_path: impl Into<PathBuf>,
    echo_to_terminal: bool,
    level: &str,
) -> LogResult<&'static Logger> {
    init(LoggerConfig::new(format, file_path, echo_to_terminal, level))
}

/// The process-wide logger, if initialized
pub fn get() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Flush the process-wide logger, if initialized
pub fn close() {
    if let Some(logger) = GLOBAL.get() {
        logger.close();
    }
}
