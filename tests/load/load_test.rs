//! Load Tests for the logging facade
//!
//! These tests simulate high load scenarios:
//! - Many concurrent tasks logging through the process-wide logger
//! - Sustained record throughput to a file destination
//!
//! Run with: cargo test --test load_test --release -- --ignored

#[path = "../support/mod.rs"]
mod support;

use logfacade::{Field, LoggerConfig};
use std::time::Instant;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore] // Slow; run manually
async fn test_concurrent_task_logging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("load.log");
    let log = logfacade::init(LoggerConfig::new("json", &path, false, "info")).unwrap();

    let tasks = 100;
    let records_per_task = 1000;
    let start = Instant::now();

    let handles: Vec<_> = (0..tasks)
        .map(|task| {
            let log = log.clone();
            tokio::spawn(async move {
                for seq in 0..records_per_task {
                    log.info(
                        "load record",
                        &[Field::int("task", task), Field::int("seq", seq)],
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }
    logfacade::close();

    let elapsed = start.elapsed();
    let total = (tasks * records_per_task) as usize;
    println!(
        "✅ Wrote {} records in {:?} ({:.0} records/sec)",
        total,
        elapsed,
        total as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(support::json_records(&path).len(), total);
}
