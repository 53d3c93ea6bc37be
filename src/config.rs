use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Analysis configuration
// ---------------------------------------------------------------------------

/// WHO 24-hour guideline limit, the same cutoff the firmware compares against.
pub const DEFAULT_THRESHOLD_PM10: f64 = 45.0;

/// File name the logger exports next to the binary.
pub const DEFAULT_SOURCE: &str = "pm10_values.csv";

/// Source path and threshold for one analysis run.
///
/// Passed into [`crate::state::AppState`] at construction time so tests can
/// inject alternate sources and thresholds; nothing here is global state.
/// An optional `airlens.json` next to the binary overrides the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Telemetry file to audit.
    pub source: PathBuf,
    /// Readings strictly above this value count as hazard events.
    pub threshold_pm10: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            source: PathBuf::from(DEFAULT_SOURCE),
            threshold_pm10: DEFAULT_THRESHOLD_PM10,
        }
    }
}

impl AnalysisConfig {
    /// Read a config file, failing on unreadable or malformed JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Read a config file if one exists; a malformed file is logged and
    /// ignored rather than aborting the dashboard.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}
