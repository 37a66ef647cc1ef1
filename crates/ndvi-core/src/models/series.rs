use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One NDVI observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdviPoint {
    pub date: NaiveDate,

    #[serde(rename = "ndvi")]
    pub value: f64,
}

impl NdviPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// NDVI time series in the order the backend returned it.
///
/// The backend emits observations chronologically; the series is never
/// re-sorted on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NdviSeries(Vec<NdviPoint>);

impl NdviSeries {
    pub fn new(points: Vec<NdviPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[NdviPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Date labels formatted as `YYYY-MM-DD`
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|p| p.date.format("%Y-%m-%d").to_string()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.value).collect()
    }
}

impl From<Vec<NdviPoint>> for NdviSeries {
    fn from(points: Vec<NdviPoint>) -> Self {
        Self(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_wire() {
        let json = r#"[{"date":"2024-03-01","ndvi":0.61},{"date":"2024-01-01","ndvi":0.42}]"#;
        let series: NdviSeries = serde_json::from_str(json).unwrap();

        assert_eq!(series.len(), 2);
        // Order is preserved even when dates are not ascending
        assert_eq!(series.labels(), vec!["2024-03-01", "2024-01-01"]);
        assert_eq!(series.values(), vec![0.61, 0.42]);
    }

    #[test]
    fn test_series_rejects_bad_date() {
        let json = r#"[{"date":"01/02/2024","ndvi":0.5}]"#;
        assert!(serde_json::from_str::<NdviSeries>(json).is_err());
    }

    #[test]
    fn test_empty_series() {
        let series = NdviSeries::default();
        assert!(series.is_empty());
        assert!(series.labels().is_empty());
    }
}
