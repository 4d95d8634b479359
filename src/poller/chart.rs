use crate::shared::types::Reading;
use crate::utils::format::format_clock;

/// Full contents of the history chart. Replaced wholesale on every history fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
    pub anomalies: usize,
}

impl ChartSeries {
    /// Keeps API order; no sorting or dedup.
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            labels: readings.iter().map(|r| format_clock(r.timestamp)).collect(),
            temperature: readings.iter().map(|r| r.temperature).collect(),
            humidity: readings.iter().map(|r| r.humidity).collect(),
            anomalies: readings.iter().filter(|r| r.is_anomaly).count(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Shared y range over both series, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.temperature
            .iter()
            .chain(self.humidity.iter())
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
