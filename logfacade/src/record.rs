//! Log records
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


use crate::field::{Field, FieldMap};
use crate::level::Severity;
use chrono::{DateTime, Local};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::panic::Location;

/// Timestamp layout of the `time` field
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Path trimmed to its last directory and file name
    pub fn short_file(&self) -> &'static str {
        let file = self.file;
        let Some(last) = file.rfind(['/', '\\']) else {
            return file;
        };
        match file[..last].rfind(['/', '\\']) {
            Some(prev) => &file[prev + 1..],
            None => file,
        }
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}

/// One log call, as handed to an encoder
#[derive(Debug)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub severity: Severity,
    pub message: &'a str,
    pub caller: Caller,
    pub fields: &'a [Field],
    pub stacktrace: Option<String>,
}

impl Record<'_> {
    pub fn formatted_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("time", &self.formatted_time())?;
        map.serialize_entry("level", self.severity.label())?;
        map.serialize_entry("message", self.message)?;
        map.serialize_entry("caller", &self.caller.to_string())?;
        for field in self.fields {
            map.serialize_entry(field.key.as_ref(), &field.value)?;
        }
        if let Some(stacktrace) = &self.stacktrace {
            map.serialize_entry("stacktrace", stacktrace)?;
        }
        map.end()
    }
}

/// Annotations of a record as a JSON object
pub(crate) fn fields_json(fields: &[Field]) -> serde_json::Result<String> {
    serde_json::to_string(&FieldMap(fields))
}
