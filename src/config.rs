use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_NAMESPACE: &str = "EarnestAITools/Metrics";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_OUTPUT_FILE: &str = "cloudwatch_metrics.json";

/// Aggregation period requested for statistics, in seconds.
pub const PERIOD_SECONDS: u32 = 60;

/// Statistic requested for every metric.
pub const STATISTIC: &str = "Average";

/// Length of the trailing window queried on each run.
const WINDOW_HOURS: i64 = 1;

/// Run configuration, built once in `main` and passed to every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub namespace: String,
    pub region: String,
    pub output_path: PathBuf,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Config {
    /// Captures the query window from a single clock reading so every fetch
    /// in the run uses the same [start, end) range.
    pub fn new(namespace: String, region: String, output_path: PathBuf) -> Self {
        let end_time = Utc::now();
        let start_time = end_time - Duration::hours(WINDOW_HOURS);

        Self {
            namespace,
            region,
            output_path,
            start_time,
            end_time,
        }
    }
}
