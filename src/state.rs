use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::data::cache::SeriesCache;
use crate::data::classify::{classify, ClassificationSummary};
use crate::data::model::SampleSeries;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every load failure lands here as a status message plus cleared data; the
/// dashboard renders that as "no data available" instead of crashing.
pub struct AppState {
    /// Source path and threshold for this run.
    pub config: AnalysisConfig,

    /// Memoized loader for the current source.
    cache: SeriesCache,

    /// Loaded series (None until a load succeeds).
    pub series: Option<SampleSeries>,

    /// Verdict for the loaded series at the configured threshold.
    pub summary: Option<ClassificationSummary>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        let cache = SeriesCache::new(&config.source);
        AppState {
            config,
            cache,
            series: None,
            summary: None,
            status_message: None,
        }
    }

    /// Run the load → classify pipeline against the configured source.
    ///
    /// Repeated calls re-use the cached series while the file is unchanged.
    pub fn refresh(&mut self) {
        match self.cache.load() {
            Ok(series) => {
                let summary = classify(&series, self.config.threshold_pm10);
                log::info!(
                    "loaded {} samples from {}, {} above {} µg/m³",
                    series.len(),
                    self.cache.path().display(),
                    summary.hazard_count,
                    self.config.threshold_pm10
                );
                self.series = Some(series);
                self.summary = Some(summary);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to load telemetry: {e}");
                self.series = None;
                self.summary = None;
                self.status_message = Some(format!("No data available: {e}"));
            }
        }
    }

    /// Point the dashboard at a different telemetry file and load it.
    pub fn open_source(&mut self, path: PathBuf) {
        self.config.source = path.clone();
        self.cache = SeriesCache::new(path);
        self.refresh();
    }

    /// Drop the cached series and re-read the current source.
    pub fn reload(&mut self) {
        self.cache.invalidate();
        self.refresh();
    }
}
