//! Logger handle and builder
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
use crate::encoder;
use crate::engine::Engine;
use crate::error::LogResult;
use crate::field::Field;
use crate::layer::FacadeLayer;
use crate::level::Severity;
use crate::record::Caller;
use crate::writer;
use std::io;
use std::panic::Location;
use std::sync::{Arc, Mutex};
use tracing::debug;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Handle to a configured logging engine.
///
/// Clones share the same engine. Logging calls never fail and never panic;
/// destination errors are reported to the engine's error output.
///
/// # Example
/// ```no_run
/// use logfacade::{Field, Logger, LoggerConfig};
///
/// let logger = Logger::new(LoggerConfig::new("json", "app.log", true, "debug"))?;
/// logger.info("Server started", &[Field::int("port", 8080)]);
/// logger.close();
/// # Ok::<(), logfacade::LogError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    engine: Arc<Engine>,
}

impl Logger {
    /// Build a logger writing to the configured destinations
    pub fn new(config: LoggerConfig) -> LogResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder::new(config)
    }

    pub fn config(&self) -> &LoggerConfig {
        self.engine.config()
    }

    /// Whether a record at `severity` would be written
    pub fn enabled(&self, severity: Severity) -> bool {
        self.engine.enabled(severity)
    }

    /// Whether both handles share one engine
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.engine, &other.engine)
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl AsRef<str>, fields: &[Field]) {
        if !self.engine.enabled(severity) {
            return;
        }
        let caller = Caller::from(Location::caller());
        self.engine.write(severity, message.as_ref(), fields, caller);
    }

    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>, fields: &[Field]) {
        self.log(Severity::Debug, message, fields);
    }

    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>, fields: &[Field]) {
        self.log(Severity::Info, message, fields);
    }

    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>, fields: &[Field]) {
        self.log(Severity::Warn, message, fields);
    }

    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>, fields: &[Field]) {
        self.log(Severity::Error, message, fields);
    }

    /// Flush buffered output to every destination
    pub fn sync(&self) -> LogResult<()> {
        self.engine.sync()
    }

    /// Flush buffered output, reporting failures to the error output.
    ///
    /// Intended for shutdown. Logging keeps working afterwards.
    pub fn close(&self) {
        if let Err(e) = self.engine.sync() {
            self.engine.report("sync", &e);
        }
    }

    /// A `tracing` layer that writes events through this logger
    pub fn layer(&self) -> FacadeLayer {
        FacadeLayer::new(Arc::clone(&self.engine))
    }

    /// Route all `tracing` events of the process into this logger.
    ///
    /// `RUST_LOG` narrows which events are forwarded; without it the
    /// configured level is used.
    pub fn install_tracing(&self) -> LogResult<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.config().level.name()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(self.layer())
            .try_init()?;

        debug!(threshold = self.config().level.name(), "Tracing events routed to logger");
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("engine", &self.engine).finish()
    }
}

/// Builds a [`Logger`], optionally replacing the process streams.
///
/// Replacing the terminal writer or the error output is mostly useful for
/// hosts that capture their own output (and for tests).
pub struct LoggerBuilder {
    config: LoggerConfig,
    terminal: Option<BoxMakeWriter>,
    error_output: Option<BoxMakeWriter>,
}

impl LoggerBuilder {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            terminal: None,
            error_output: None,
        }
    }

    /// Writer used in place of standard output
    pub fn terminal(mut self, writer: impl io::Write + Send + 'static) -> Self {
        self.terminal = Some(BoxMakeWriter::new(Mutex::new(writer)));
        self
    }

    /// Writer used in place of standard error for the logger's own failures
    pub fn error_output(mut self, writer: impl io::Write + Send + 'static) -> Self {
        self.error_output = Some(BoxMakeWriter::new(Mutex::new(writer)));
        self
    }

    /// Open every destination and build the engine.
    ///
    /// Fails if any destination cannot be opened; no partial logger is returned.
    pub fn build(self) -> LogResult<Logger> {
        let LoggerBuilder {
            config,
            terminal,
            error_output,
        } = self;

        let destinations = config.destinations();
        let writer = writer::open_all(&destinations, terminal)?;
        let error_output = error_output.unwrap_or_else(|| BoxMakeWriter::new(io::stderr));

        debug!(
            format = %config.format,
            threshold = config.level.name(),
            destinations = %writer::describe(&destinations),
            development = config.development,
            "Logger constructed"
        );

        let encoder = encoder::for_format(config.format);
        let engine = Engine::new(
            config,
            encoder,
            writer,
            writer::describe(&destinations),
            error_output,
        );
        Ok(Logger {
            engine: Arc::new(engine),
        })
    }
}
