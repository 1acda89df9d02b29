use std::path::PathBuf;

use clap::Parser;

use cwsnap::cloudwatch::AwsCli;
use cwsnap::config::{Config, DEFAULT_NAMESPACE, DEFAULT_OUTPUT_FILE, DEFAULT_REGION};
use cwsnap::report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Snapshot recent CloudWatch metrics to a local JSON file", long_about = None)]
struct Args {
    /// CloudWatch namespace to enumerate
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// AWS region to query
    #[arg(short, long, default_value = DEFAULT_REGION)]
    region: String,

    /// Path of the JSON report to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.namespace.trim().is_empty() || args.region.trim().is_empty() {
        eprintln!("Error: namespace and region must be non-empty");
        std::process::exit(1);
    }

    let config = Config::new(args.namespace, args.region, args.output);
    let output_path = config.output_path.clone();
    let source = AwsCli::new(config);

    let records = report::collect(&source).await?;
    report::write(&records, &output_path)?;

    println!("Metrics data saved to {}", output_path.display());
    Ok(())
}
