//! The process-wide logger built from a prepared builder
//!
//! A host that captures its own output hands the terminal writer to the
//! builder; the global accessor keeps that logger for the rest of the process.

#[path = "../support/mod.rs"]
mod support;

use logfacade::{Field, Logger, LoggerConfig, Severity};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use support::{json_records, messages};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_global_logger_from_builder_writes_to_injected_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let terminal = Capture::default();

    let builder = Logger::builder(LoggerConfig::new("json", &path, true, "info"))
        .terminal(terminal.clone());
    let logger = logfacade::init_with(builder).unwrap();

    logger.debug("hidden", &[]);
    logger.info("request served", &[Field::str("route", "/health")]);
    logger.error("upstream timeout", &[Field::int("attempt", 3)]);
    logfacade::close();

    let echoed = terminal.lines();
    assert_eq!(echoed.len(), 2);
    assert_eq!(echoed[0]["message"], "request served");
    assert_eq!(echoed[0]["route"], "/health");
    assert_eq!(echoed[1]["level"], "ERROR");
    assert_eq!(echoed[1]["attempt"], 3);

    // The file holds exactly what the terminal saw
    assert_eq!(json_records(&path), echoed);

    // A later plain initialization returns the builder's logger unchanged
    let other_path = dir.path().join("other.log");
    let again = logfacade::init(LoggerConfig::new("console", &other_path, false, "debug")).unwrap();
    assert!(again.ptr_eq(logger));
    assert!(logfacade::get().unwrap().ptr_eq(logger));
    assert_eq!(again.config().level, Severity::Info);
    assert_eq!(again.config().file_path, path);
    assert!(!other_path.exists());

    again.warn("still captured", &[]);
    logfacade::close();
    assert_eq!(terminal.lines().len(), 3);
    assert_eq!(
        messages(&path),
        vec!["request served", "upstream timeout", "still captured"]
    );
}
