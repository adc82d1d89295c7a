//! Integration tests for the process-wide logger
//!
//! The first successful initialization wins; later configurations are ignored.

#[path = "../support/mod.rs"]
mod support;

use logfacade::{EncodingFormat, LoggerConfig, Severity};
use support::{json_records, messages};

#[test]
fn test_second_initialization_has_no_effect() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.log");
    let second_path = dir.path().join("second.log");

    assert!(logfacade::get().is_none());

    let first = logfacade::init(LoggerConfig::new("json", &first_path, false, "warn")).unwrap();
    let second =
        logfacade::init_from_parts("console", &second_path, true, "debug").unwrap();

    // One engine, configured by the first call
    assert!(first.ptr_eq(second));
    assert!(std::ptr::eq(first, second));
    assert!(logfacade::get().unwrap().ptr_eq(first));
    assert_eq!(second.config().format, EncodingFormat::Json);
    assert_eq!(second.config().level, Severity::Warn);
    assert_eq!(second.config().file_path, first_path);

    second.debug("dropped by the first threshold", &[]);
    second.info("also dropped", &[]);
    second.warn("kept", &[]);
    second.error("kept too", &[]);
    logfacade::close();

    assert!(!second_path.exists());
    assert_eq!(messages(&first_path), vec!["kept", "kept too"]);

    // Records are JSON even though the second call asked for console output
    let records = json_records(&first_path);
    assert_eq!(records[0]["level"], "WARN");
    assert_eq!(records[1]["level"], "ERROR");
}
