use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Sample – one telemetry reading
// ---------------------------------------------------------------------------

/// A single PM10 reading (one row of the source file).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Particulate concentration in µg/m³.
    pub pm10: f64,
    /// When the reading was taken. Naive source timestamps are assumed UTC.
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// SampleSeries – the complete loaded time series
// ---------------------------------------------------------------------------

/// The full parsed series, ordered ascending by timestamp.
///
/// Constructed only through [`SampleSeries::from_samples`], which establishes
/// the ordering invariant. Duplicate timestamps are retained; the sort is
/// stable, so ties keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Build a series from unordered samples, sorting by timestamp.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        SampleSeries { samples }
    }

    /// All samples, ascending by timestamp.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest reading in the series, if any. Drives the chart's hazard band.
    pub fn max_pm10(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.pm10).reduce(f64::max)
    }

    /// First and last timestamp, if any.
    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.samples.first()?.timestamp;
        let last = self.samples.last()?.timestamp;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, pm10: f64) -> Sample {
        Sample {
            pm10,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_from_samples_sorts_by_timestamp() {
        let series = SampleSeries::from_samples(vec![at(3, 40.0), at(1, 10.0), at(2, 50.0)]);
        let values: Vec<f64> = series.samples().iter().map(|s| s.pm10).collect();
        assert_eq!(values, vec![10.0, 50.0, 40.0]);
        assert!(series
            .samples()
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_duplicate_timestamps_keep_input_order() {
        let series = SampleSeries::from_samples(vec![at(1, 1.0), at(1, 2.0), at(1, 3.0)]);
        let values: Vec<f64> = series.samples().iter().map(|s| s.pm10).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_max_pm10_and_time_bounds() {
        let series = SampleSeries::from_samples(vec![at(2, 40.0), at(1, 55.5), at(3, 12.0)]);
        assert_eq!(series.max_pm10(), Some(55.5));
        let (first, last) = series.time_bounds().unwrap();
        assert_eq!(first, Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap());
        assert_eq!(last, Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_empty_series() {
        let series = SampleSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert_eq!(series.max_pm10(), None);
        assert_eq!(series.time_bounds(), None);
    }
}
