//! JSON configuration of the demo tools.
//!
//! Each tool takes the path of a JSON file as its only argument. Optional
//! sections fall back to their defaults.

pub mod detect;
pub mod manual;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
