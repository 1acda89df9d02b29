use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One Name/Value qualifier narrowing a metric to a single time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Identity of one time series within the namespace, as returned by listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    #[serde(rename = "MetricName")]
    pub metric_name: String,
    #[serde(rename = "Dimensions", default)]
    pub dimensions: Vec<Dimension>,
}

/// One aggregated sample of a time series. The aliases accept the
/// provider's Pascal-case field spellings on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datapoint {
    #[serde(alias = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "Average")]
    pub average: f64,
    #[serde(alias = "Unit")]
    pub unit: String,
}

/// The unit persisted per metric in the report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "MetricName")]
    pub metric_name: String,
    #[serde(rename = "Dimensions")]
    pub dimensions: Vec<Dimension>,
    #[serde(rename = "DataPoints")]
    pub datapoints: Vec<Datapoint>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MetricRecord {
    pub fn new(metric: MetricDescriptor, datapoints: Vec<Datapoint>) -> Self {
        Self {
            metric_name: metric.metric_name,
            dimensions: metric.dimensions,
            datapoints,
            error: None,
        }
    }

    /// Placeholder for a metric whose fetch failed; keeps the run going.
    pub fn failed(metric: MetricDescriptor, error: String) -> Self {
        Self {
            metric_name: metric.metric_name,
            dimensions: metric.dimensions,
            datapoints: Vec::new(),
            error: Some(error),
        }
    }
}

/// `list-metrics` response body. A missing `Metrics` key means no data.
#[derive(Debug, Deserialize)]
pub struct ListMetricsResponse {
    #[serde(rename = "Metrics", default)]
    pub metrics: Vec<MetricDescriptor>,
}

/// `get-metric-statistics` response body. A missing `Datapoints` key means
/// the metric had no activity in the window.
#[derive(Debug, Deserialize)]
pub struct GetStatisticsResponse {
    #[serde(rename = "Datapoints", default)]
    pub datapoints: Vec<Datapoint>,
}

/// Seam between the collector and the monitoring service.
#[async_trait]
pub trait MetricsSource {
    /// All metrics currently registered under the configured namespace,
    /// in provider order.
    async fn list_metrics(&self) -> Result<Vec<MetricDescriptor>>;

    /// Statistics for one metric over the run's trailing window.
    async fn fetch_statistics(&self, metric: &MetricDescriptor) -> Result<Vec<Datapoint>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datapoint_decodes_provider_field_names() {
        let json = r#"{"Timestamp": "2024-01-01T00:00:00+00:00", "Average": 42.0, "Unit": "Percent"}"#;
        let point: Datapoint = serde_json::from_str(json).unwrap();

        assert_eq!(point.average, 42.0);
        assert_eq!(point.unit, "Percent");
        assert_eq!(point.timestamp, "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn datapoint_round_trip() {
        let point = Datapoint {
            timestamp: "2024-01-01T00:00:00Z".parse().unwrap(),
            average: 42.0,
            unit: "Percent".to_string(),
        };

        let encoded = serde_json::to_string(&point).unwrap();
        assert_eq!(encoded, r#"{"timestamp":"2024-01-01T00:00:00Z","average":42.0,"unit":"Percent"}"#);

        let decoded: Datapoint = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, point);
    }

    #[test]
    fn statistics_response_preserves_order_and_values() {
        let json = r#"{
            "Label": "CPUUtilization",
            "Datapoints": [
                {"Timestamp": "2024-01-01T00:02:00+00:00", "Average": 3.5, "Unit": "Percent"},
                {"Timestamp": "2024-01-01T00:00:00+00:00", "Average": 1.0, "Unit": "Percent"},
                {"Timestamp": "2024-01-01T00:01:00+00:00", "Average": 2.25, "Unit": "Percent"}
            ]
        }"#;
        let response: GetStatisticsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.datapoints.len(), 3);
        assert_eq!(response.datapoints[0].average, 3.5);
        assert_eq!(response.datapoints[1].average, 1.0);
        assert_eq!(response.datapoints[2].average, 2.25);
    }

    #[test]
    fn missing_datapoints_key_is_empty() {
        let response: GetStatisticsResponse =
            serde_json::from_str(r#"{"Label": "CPUUtilization"}"#).unwrap();
        assert!(response.datapoints.is_empty());
    }

    #[test]
    fn missing_metrics_key_is_empty() {
        let response: ListMetricsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.metrics.is_empty());
    }

    #[test]
    fn descriptor_without_dimensions_defaults_to_empty() {
        let descriptor: MetricDescriptor =
            serde_json::from_str(r#"{"MetricName": "RequestCount"}"#).unwrap();
        assert_eq!(descriptor.metric_name, "RequestCount");
        assert!(descriptor.dimensions.is_empty());
    }

    #[test]
    fn error_annotation_is_omitted_when_absent() {
        let record = MetricRecord::new(
            MetricDescriptor {
                metric_name: "RequestCount".to_string(),
                dimensions: vec![],
            },
            vec![],
        );

        let encoded = serde_json::to_string(&record).unwrap();
        assert_eq!(encoded, r#"{"MetricName":"RequestCount","Dimensions":[],"DataPoints":[]}"#);
    }
}
