//! Helpers shared by the integration targets
#![allow(dead_code)]

use std::path::Path;

/// Parse every line of a JSON log file
pub fn json_records(path: &Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|line| serde_json::from_str(line).expect("record is valid JSON"))
        .collect()
}

/// Messages of every record in a JSON log file
pub fn messages(path: &Path) -> Vec<String> {
    json_records(path)
        .iter()
        .map(|record| record["message"].as_str().unwrap_or_default().to_string())
        .collect()
}
