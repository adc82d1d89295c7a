//! Output destinations, built from `tracing-appender` and `tracing-subscriber` writers
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

use crate::config::Destination;
use crate::error::{LogError, LogResult};
use std::io;
use std::path::Path;
use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Open a single configured destination.
///
/// Files are appended to and never rotated; a missing parent directory is
/// created by the appender.
pub fn open(destination: &Destination) -> LogResult<BoxMakeWriter> {
    match destination {
        Destination::Stdout => Ok(BoxMakeWriter::new(io::stdout)),
        Destination::Stderr => Ok(BoxMakeWriter::new(io::stderr)),
        Destination::File(path) => open_file(path).map(BoxMakeWriter::new),
    }
}

fn open_file(path: &Path) -> LogResult<tracing_appender::rolling::RollingFileAppender> {
    let open_error = |source: io::Error| LogError::OpenDestination {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| open_error(io::Error::new(io::ErrorKind::InvalidInput, "no file name")))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Builder::new()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| open_error(io::Error::new(io::ErrorKind::Other, e)))
}

/// Open every destination and tee them into one writer.
///
/// `terminal` replaces standard output wherever it appears in the set.
pub fn open_all(
    destinations: &[Destination],
    mut terminal: Option<BoxMakeWriter>,
) -> LogResult<BoxMakeWriter> {
    let mut combined: Option<BoxMakeWriter> = None;
    for destination in destinations {
        let writer = match (destination, terminal.take()) {
            (Destination::Stdout, Some(writer)) => writer,
            (_, writer) => {
                terminal = writer;
                open(destination)?
            }
        };
        combined = Some(match combined {
            Some(previous) => BoxMakeWriter::new(previous.and(writer)),
            None => writer,
        });
    }
    Ok(combined.unwrap_or_else(|| BoxMakeWriter::new(io::sink)))
}

/// Human readable list of destinations, used in flush errors
pub fn describe(destinations: &[Destination]) -> String {
    destinations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
