//! Structured logging facade
//!
//! One configuration (format, file, terminal echo, minimum severity) builds one
//! logging engine; [`Logger`] handles forward leveled records to it.
//!
//! - [`Logger::new`] builds an engine explicitly, to be owned by the host's
//!   composition root and passed to whatever needs it.
//! - [`init`] builds the process-wide logger exactly once and hands out the
//!   same handle to every caller.
//! - [`Logger::install_tracing`] routes `tracing` events into the same engine.
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


pub mod config;
pub mod encoder;
mod engine;
pub mod error;
pub mod field;
mod global;
pub mod layer;
pub mod level;
pub mod logger;
pub mod record;
pub mod writer;

pub use config::{Destination, EncodingFormat, LoggerConfig};
pub use error::{LogError, LogResult};
pub use field::{Field, Value};
pub use global::{close, get, init, init_from_parts, init_with};
pub use layer::FacadeLayer;
pub use level::Severity;
pub use logger::{Logger, LoggerBuilder};
