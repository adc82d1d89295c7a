//! Concurrent first-time initialization
//!
//! Many threads race to initialize the process-wide logger with distinct
//! configurations; exactly one configuration is built and everyone shares it.

#[path = "../support/mod.rs"]
mod support;

use logfacade::{Field, LoggerConfig};
use std::sync::{Arc, Barrier};
use std::thread;

const RACERS: usize = 16;

#[test]
fn test_racing_initializers_share_one_logger() {
    let dir = tempfile::tempdir().unwrap();
    let barrier = Arc::new(Barrier::new(RACERS));
    let levels = ["debug", "info", "warn", "error"];

    let handles: Vec<_> = (0..RACERS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let path = dir.path().join(format!("racer-{i}.log"));
            let level = levels[i % levels.len()];
            thread::spawn(move || {
                barrier.wait();
                let config = LoggerConfig::new("json", path, false, level);
                let logger = logfacade::init(config).unwrap();
                logger.error("racer done", &[Field::new("racer", i)]);
                logger
            })
        })
        .collect();

    let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    logfacade::close();

    let winner = loggers[0];
    for logger in &loggers {
        assert!(logger.ptr_eq(winner));
        assert_eq!(logger.config(), winner.config());
    }

    // Only the winning configuration ever opened its file
    let created: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(created, vec![winner.config().file_path.clone()]);

    // Every racer wrote through the same engine
    let mut racers: Vec<u64> = support::json_records(&created[0])
        .iter()
        .map(|record| record["racer"].as_u64().unwrap())
        .collect();
    racers.sort_unstable();
    assert_eq!(racers, (0..RACERS as u64).collect::<Vec<_>>());
}
