//! Logging Facade Demo
//!
//! Host application showing the intended lifecycle: load settings, build the
//! process-wide logger once, log from concurrent tasks (directly and through
//! `tracing`), then flush on shutdown.
//!
//! Settings come from `LOG_*` environment variables or the file named by
//! `LOG_CONFIG_FILE`.
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


use anyhow::Result;
use logfacade::{Field, Logger};
use logfacade_config::LoggingSettings;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_file = std::env::var("LOG_CONFIG_FILE").ok().map(PathBuf::from);
    let settings = LoggingSettings::load(config_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load logging configuration: {}", e))?;

    // Initialize logging; a logger that cannot open its file aborts start-up
    let log = logfacade::init(settings.logger_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    log.install_tracing()?;

    log.info(
        "Starting demo",
        &[
            Field::str("format", settings.format.as_str()),
            Field::str("file", settings.file.as_str()),
            Field::str("level", settings.level.as_str()),
        ],
    );

    // A second initialization is ignored and hands back the same logger
    let again = logfacade::init_from_parts("console", "ignored.log", false, "error")?;
    log.debug(
        "Re-initialization returned existing logger",
        &[Field::bool("same_logger", again.ptr_eq(log))],
    );

    let workers: Vec<_> = (0..4)
        .map(|id| tokio::spawn(run_worker(id, log.clone())))
        .collect();
    for worker in workers {
        if let Err(e) = worker.await {
            log.error("Worker task failed", &[Field::error(&e)]);
        }
    }

    info!(workers = 4, "All workers finished");
    log.info("Demo stopped", &[]);

    logfacade::close();
    Ok(())
}

async fn run_worker(id: u32, log: Logger) {
    for job in 0..3u32 {
        log.debug("Job picked up", &[Field::new("worker", id), Field::new("job", job)]);
        tokio::time::sleep(Duration::from_millis(10 * u64::from(id + 1))).await;

        if (id + job) % 5 == 4 {
            warn!(worker = id, job, "Job took the slow path");
        } else {
            log.info(
                "Job finished",
                &[Field::new("worker", id), Field::new("job", job)],
            );
        }
    }
}
