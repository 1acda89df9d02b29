//! One-shot CloudWatch metric snapshots, written to a local JSON file.

pub mod cloudwatch;
pub mod config;
pub mod error;
pub mod report;
