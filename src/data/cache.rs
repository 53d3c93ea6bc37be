use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::loader::{self, LoadError};
use super::model::SampleSeries;

// ---------------------------------------------------------------------------
// SeriesCache – memoized load keyed by path + modification time
// ---------------------------------------------------------------------------

/// Caches the last successful load of one source file.
///
/// Repeated loads return the cached series while the file's modification
/// time is unchanged; a changed (or unreadable) mtime forces a re-read, as
/// does [`SeriesCache::invalidate`]. Failed loads are never cached, so every
/// call retries them.
#[derive(Debug)]
pub struct SeriesCache {
    path: PathBuf,
    last_modified: Option<SystemTime>,
    cached: Option<SampleSeries>,
}

impl SeriesCache {
    /// Create a cache for the given source path. Nothing is read until
    /// the first [`SeriesCache::load`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SeriesCache {
            path: path.as_ref().to_path_buf(),
            last_modified: None,
            cached: None,
        }
    }

    /// The source path this cache reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the series, re-reading the file only when it changed.
    pub fn load(&mut self) -> Result<SampleSeries, LoadError> {
        let modified = self.modified_time();

        if let Some(cached) = &self.cached {
            if modified.is_some() && modified == self.last_modified {
                log::debug!("cache hit for {}", self.path.display());
                return Ok(cached.clone());
            }
        }

        let series = loader::load_file(&self.path)?;
        self.last_modified = modified;
        self.cached = Some(series.clone());
        Ok(series)
    }

    /// Drop the cached series; the next [`SeriesCache::load`] re-reads.
    pub fn invalidate(&mut self) {
        self.cached = None;
        self.last_modified = None;
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::TempDir;

    const GOOD: &str = "pm10,timestamp\n12.4,2024-01-01T00:00:00+00:00\n";

    /// Write `content` and pin the file's mtime so cache comparisons are
    /// deterministic regardless of filesystem timestamp resolution.
    fn write_pinned(path: &Path, content: &str, mtime: SystemTime) {
        let mut file = File::create(path).unwrap();
        write!(file, "{content}").unwrap();
        file.set_modified(mtime).unwrap();
    }

    #[test]
    fn test_unchanged_file_is_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pm10.csv");
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        write_pinned(&path, GOOD, mtime);

        let mut cache = SeriesCache::new(&path);
        let first = cache.load().unwrap();

        // Corrupt the file but keep the mtime: the cache must not re-read.
        write_pinned(&path, "garbage", mtime);
        let second = cache.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_modified_file_is_reloaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pm10.csv");
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        write_pinned(&path, GOOD, mtime);

        let mut cache = SeriesCache::new(&path);
        assert_eq!(cache.load().unwrap().len(), 1);

        write_pinned(
            &path,
            "pm10,timestamp\n12.4,2024-01-01T00:00:00+00:00\n50.0,2024-01-01T01:00:00+00:00\n",
            mtime + Duration::from_secs(60),
        );
        assert_eq!(cache.load().unwrap().len(), 2);
    }

    #[test]
    fn test_invalidate_forces_reread() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pm10.csv");
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        write_pinned(&path, GOOD, mtime);

        let mut cache = SeriesCache::new(&path);
        cache.load().unwrap();

        write_pinned(&path, "garbage", mtime);
        cache.invalidate();
        assert!(cache.load().is_err());
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pm10.csv");

        let mut cache = SeriesCache::new(&path);
        assert!(matches!(
            cache.load(),
            Err(LoadError::SourceNotFound { .. })
        ));

        // Once the file appears the next call succeeds.
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        write_pinned(&path, GOOD, mtime);
        assert_eq!(cache.load().unwrap().len(), 1);
    }
}
