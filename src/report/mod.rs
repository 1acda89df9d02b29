use std::fs;
use std::path::Path;

use crate::cloudwatch::{Dimension, MetricRecord, MetricsSource};
use crate::error::{Error, Result};

fn format_dimensions(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|d| format!("{}={}", d.name, d.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects one record per metric in the namespace, in listing order.
///
/// A fetch failure for one metric is recorded as an error-annotated
/// placeholder rather than aborting the run; a listing failure is fatal
/// since no metrics are known without it.
pub async fn collect<S: MetricsSource>(source: &S) -> Result<Vec<MetricRecord>> {
    let metrics = source.list_metrics().await?;
    let mut records = Vec::with_capacity(metrics.len());

    for metric in metrics {
        println!(
            "Fetching data for metric: {} with dimensions: [{}]",
            metric.metric_name,
            format_dimensions(&metric.dimensions)
        );

        let record = match source.fetch_statistics(&metric).await {
            Ok(datapoints) => MetricRecord::new(metric, datapoints),
            Err(e) => {
                eprintln!("Failed to fetch {}: {}", metric.metric_name, e);
                let message = e.to_string();
                MetricRecord::failed(metric, message)
            }
        };
        records.push(record);
    }

    Ok(records)
}

/// Serializes the full report and atomically replaces any previous file.
/// Writing to a temp path first means a failure mid-write never leaves a
/// truncated report behind.
pub fn write(records: &[MetricRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(|source| Error::WriteReport {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| Error::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
