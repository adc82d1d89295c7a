//! The engine behind every logger handle
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
use crate::encoder::Encoder;
use crate::error::{LogError, LogResult};
use crate::field::Field;
use crate::level::Severity;
use crate::record::{Caller, Record, TIME_FORMAT};
use chrono::Local;
use std::backtrace::Backtrace;
use std::fmt::Display;
use std::io::Write;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Encodes records and hands them to the destination writer.
///
/// Failures never reach the code that logged; they are reported to
/// `error_output`, which is separate from the record destinations.
pub(crate) struct Engine {
    config: LoggerConfig,
    encoder: Box<dyn Encoder>,
    writer: BoxMakeWriter,
    destinations: String,
    error_output: BoxMakeWriter,
}

impl Engine {
    pub(crate) fn new(
        config: LoggerConfig,
        encoder: Box<dyn Encoder>,
        writer: BoxMakeWriter,
        destinations: String,
        error_output: BoxMakeWriter,
    ) -> Self {
        Self {
            config,
            encoder,
            writer,
            destinations,
            error_output,
        }
    }

    pub(crate) fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub(crate) fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.config.level)
    }

    pub(crate) fn write(
        &self,
        severity: Severity,
        message: &str,
        fields: &[Field],
        caller: Caller,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let stacktrace = (self.config.development && severity >= Severity::Warn)
            .then(|| Backtrace::force_capture().to_string());

        let record = Record {
            time: Local::now(),
            severity,
            message,
            caller,
            fields,
            stacktrace,
        };

        let mut buf = Vec::with_capacity(256);
        if let Err(e) = self.encoder.encode(&record, &mut buf) {
            self.report("encode", &e);
            return;
        }

        // The tee writes every destination before returning the first failure.
        if let Err(e) = self.writer.make_writer().write_all(&buf) {
            self.report("write", &e);
        }
    }

    pub(crate) fn sync(&self) -> LogResult<()> {
        self.writer
            .make_writer()
            .flush()
            .map_err(|source| LogError::Flush {
                destination: self.destinations.clone(),
                source,
            })
    }

    pub(crate) fn report(&self, kind: &str, err: &dyn Display) {
        let line = format!(
            "{} {} error: {}\n",
            Local::now().format(TIME_FORMAT),
            kind,
            err
        );
        let mut output = self.error_output.make_writer();
        // Nowhere left to report a failing error output.
        let _ = output.write_all(line.as_bytes());
        let _ = output.flush();
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("destinations", &self.destinations)
            .finish_non_exhaustive()
    }
}
