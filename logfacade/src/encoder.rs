//! Record encoders
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


use crate::config::EncodingFormat;
use crate::record::{fields_json, Record};

/// Turns a record into the bytes appended to every destination
pub trait Encoder: Send + Sync {
    /// Append one encoded record, including its trailing newline, to `buf`
    fn encode(&self, record: &Record<'_>, buf: &mut Vec<u8>) -> serde_json::Result<()>;
}

/// One JSON object per line
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, record: &Record<'_>, buf: &mut Vec<u8>) -> serde_json::Result<()> {
        serde_json::to_writer(&mut *buf, record)?;
        buf.push(b'\n');
        Ok(())
    }
}

/// Tab separated plain text:
/// `time  LEVEL  caller  message  {annotations}`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleEncoder;

impl Encoder for ConsoleEncoder {
    fn encode(&self, record: &Record<'_>, buf: &mut Vec<u8>) -> serde_json::Result<()> {
        let mut line = format!(
            "{}\t{:<5}\t{}\t{}",
            record.formatted_time(),
            record.severity.label(),
            record.caller,
            record.message
        );
        if !record.fields.is_empty() {
            line.push('\t');
            line.push_str(&fields_json(record.fields)?);
        }
        line.push('\n');
        if let Some(stacktrace) = &record.stacktrace {
            line.push_str(stacktrace.trim_end());
            line.push('\n');
        }
        buf.extend_from_slice(line.as_bytes());
        Ok(())
    }
}

/// Encoder for a configured format
pub fn for_format(format: EncodingFormat) -> Box<dyn Encoder> {
    match format {
        EncodingFormat::Json => Box::new(JsonEncoder),
        EncodingFormat::Console => Box::new(ConsoleEncoder),
    }
}
