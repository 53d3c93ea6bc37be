use super::model::SampleSeries;

// ---------------------------------------------------------------------------
// Threshold classification
// ---------------------------------------------------------------------------

/// Aggregate verdict over a series for one threshold.
///
/// `safety_percentage` is `None` for the empty series ("not applicable"),
/// never `0%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationSummary {
    pub total_samples: usize,
    pub hazard_count: usize,
    pub safety_percentage: Option<f64>,
}

/// Classify every sample against `threshold`.
///
/// A hazard event is a reading strictly above the threshold; a reading
/// exactly at the threshold is safe, matching the firmware's `>` comparison.
/// Pure: same series and threshold always produce the same summary.
pub fn classify(series: &SampleSeries, threshold: f64) -> ClassificationSummary {
    let total_samples = series.len();
    let hazard_count = series
        .samples()
        .iter()
        .filter(|s| s.pm10 > threshold)
        .count();

    let safety_percentage = if total_samples > 0 {
        Some((total_samples - hazard_count) as f64 / total_samples as f64 * 100.0)
    } else {
        None
    };

    ClassificationSummary {
        total_samples,
        hazard_count,
        safety_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;
    use chrono::{TimeZone, Utc};

    fn series(values: &[f64]) -> SampleSeries {
        SampleSeries::from_samples(
            values
                .iter()
                .enumerate()
                .map(|(i, &pm10)| Sample {
                    pm10,
                    timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, i as u32, 0).unwrap(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_one_breach_out_of_three() {
        let summary = classify(&series(&[10.0, 50.0, 40.0]), 45.0);
        assert_eq!(summary.total_samples, 3);
        assert_eq!(summary.hazard_count, 1);
        let pct = summary.safety_percentage.unwrap();
        assert!((pct - 66.67).abs() < 0.01);
    }

    #[test]
    fn test_empty_series_is_not_applicable() {
        let summary = classify(&SampleSeries::default(), 45.0);
        assert_eq!(summary.total_samples, 0);
        assert_eq!(summary.hazard_count, 0);
        assert_eq!(summary.safety_percentage, None);
    }

    #[test]
    fn test_reading_at_threshold_is_safe() {
        let summary = classify(&series(&[45.0, 44.9, 20.0]), 45.0);
        assert_eq!(summary.hazard_count, 0);
        assert_eq!(summary.safety_percentage, Some(100.0));
    }

    #[test]
    fn test_all_readings_above_threshold() {
        let summary = classify(&series(&[46.0, 90.0, 120.5]), 45.0);
        assert_eq!(summary.hazard_count, 3);
        assert_eq!(summary.safety_percentage, Some(0.0));
    }

    #[test]
    fn test_zero_threshold_counts_all_positive() {
        let summary = classify(&series(&[0.0, 0.1, 12.0]), 0.0);
        assert_eq!(summary.hazard_count, 2);
    }

    #[test]
    fn test_threshold_at_max_value() {
        let s = series(&[10.0, 50.0, 40.0]);
        let summary = classify(&s, 50.0);
        assert_eq!(summary.hazard_count, 0);
        assert_eq!(summary.total_samples, s.len());
    }

    #[test]
    fn test_percentage_stays_in_range() {
        for threshold in [0.0, 10.0, 45.0, 100.0] {
            let summary = classify(&series(&[0.0, 15.0, 45.0, 80.0]), threshold);
            let pct = summary.safety_percentage.unwrap();
            assert!((0.0..=100.0).contains(&pct));
        }
    }
}
