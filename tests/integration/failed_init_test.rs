//! A logger that cannot open its destination is never installed

#[path = "../support/mod.rs"]
mod support;

use logfacade::{LogError, LoggerConfig};

#[test]
fn test_failed_initialization_leaves_logger_unset() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let unwritable = blocker.join("app.log");

    let err = logfacade::init(LoggerConfig::new("json", &unwritable, false, "info")).unwrap_err();
    assert!(matches!(err, LogError::OpenDestination { .. }));
    assert!(logfacade::get().is_none());

    // Closing an uninitialized logger is a no-op
    logfacade::close();

    // A corrected configuration can still initialize
    let path = dir.path().join("app.log");
    let logger = logfacade::init(LoggerConfig::new("json", &path, false, "info")).unwrap();
    logger.info("recovered", &[]);
    logfacade::close();

    assert_eq!(support::messages(&path), vec!["recovered"]);
}
