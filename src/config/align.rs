use crate::align::AlignParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AlignToolConfig {
    /// Image whose points are mapped (source of the homography).
    pub input_a: PathBuf,
    /// Image the points are mapped onto.
    pub input_b: PathBuf,
    /// Load the inputs as single-channel grayscale instead of RGB.
    #[serde(default)]
    pub grayscale: bool,
    #[serde(default)]
    pub params: AlignParams,
    pub output: AlignOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct AlignOutputConfig {
    /// Where to write the JSON `AlignReport`.
    pub report: PathBuf,
    /// Optional dumps of the pre-warped inputs (only with a cylindrical focal).
    #[serde(default)]
    pub prepared_a: Option<PathBuf>,
    #[serde(default)]
    pub prepared_b: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AlignToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: AlignToolConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config
        .params
        .validate()
        .map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
    Ok(config)
}
