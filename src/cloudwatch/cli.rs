use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use tokio::process::Command;

use crate::config::{Config, PERIOD_SECONDS, STATISTIC};
use crate::error::{Error, Result};

use super::types::{
    Datapoint, GetStatisticsResponse, ListMetricsResponse, MetricDescriptor, MetricsSource,
};

/// Runs `aws cloudwatch` subcommands and decodes their JSON output.
pub struct AwsCli {
    config: Config,
}

impl AwsCli {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Spawns one `aws` process with an explicit argument list (never a
    /// shell string, so metric names and dimension values cannot be
    /// reinterpreted) and waits for it to exit before returning.
    async fn run<T: DeserializeOwned>(&self, args: &[String]) -> Result<T> {
        let command = format!("aws {}", args.join(" "));

        let output = Command::new("aws")
            .args(args)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|source| Error::BadResponse { command, source })
    }

    fn list_metrics_args(&self) -> Vec<String> {
        vec![
            "cloudwatch".to_string(),
            "list-metrics".to_string(),
            "--namespace".to_string(),
            self.config.namespace.clone(),
            "--region".to_string(),
            self.config.region.clone(),
            "--output".to_string(),
            "json".to_string(),
        ]
    }

    fn statistics_args(&self, metric: &MetricDescriptor) -> Result<Vec<String>> {
        // An empty dimension set is still sent as `[]`; omitting the flag
        // would query across all dimension combinations instead.
        let dimensions = serde_json::to_string(&metric.dimensions)?;

        Ok(vec![
            "cloudwatch".to_string(),
            "get-metric-statistics".to_string(),
            "--namespace".to_string(),
            self.config.namespace.clone(),
            "--metric-name".to_string(),
            metric.metric_name.clone(),
            "--start-time".to_string(),
            self.config.start_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            "--end-time".to_string(),
            self.config.end_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            "--period".to_string(),
            PERIOD_SECONDS.to_string(),
            "--statistics".to_string(),
            STATISTIC.to_string(),
            "--region".to_string(),
            self.config.region.clone(),
            "--dimensions".to_string(),
            dimensions,
            "--output".to_string(),
            "json".to_string(),
        ])
    }
}

#[async_trait]
impl MetricsSource for AwsCli {
    async fn list_metrics(&self) -> Result<Vec<MetricDescriptor>> {
        let response: ListMetricsResponse = self.run(&self.list_metrics_args()).await?;
        Ok(response.metrics)
    }

    async fn fetch_statistics(&self, metric: &MetricDescriptor) -> Result<Vec<Datapoint>> {
        let args = self.statistics_args(metric)?;
        let response: GetStatisticsResponse = self.run(&args).await?;
        Ok(response.datapoints)
    }
}
