use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use realty_trends::{Config, Pipeline, PipelineReport};

#[derive(Parser, Debug)]
#[command(name = "realty-trends")]
#[command(version = "0.1.0")]
#[command(about = "Analyze Taiwan real estate prices and chart the trends")]
struct Args {
    /// Path to the dataset CSV
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Directory the chart images are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip opening the charts in the image viewer after rendering
    #[arg(long)]
    no_show: bool,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("realty_trends=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration; CLI flags win over the environment
    let mut config = Config::from_env();
    if let Some(data) = args.data {
        config.data_path = data;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if args.no_show {
        config.show_charts = false;
    }

    let pipeline = Pipeline::new(config);

    // A missing or unreadable dataset has already been reported by the
    // loader; finish quietly without artifacts.
    let Some(report) = pipeline.run()? else {
        return Ok(());
    };

    output_report(&report, &args.format)?;

    Ok(())
}

fn output_report(report: &PipelineReport, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(report)?),
        _ => print!("{}", format_text(report)),
    }

    Ok(())
}

fn format_text(report: &PipelineReport) -> String {
    let mut output = String::new();

    output.push_str("\n=== Price Trend Analysis ===\n\n");
    output.push_str(&format!("Rows loaded: {}\n", report.rows_loaded));
    output.push_str(&format!(
        "Rows dropped (missing values): {}\n",
        report.rows_dropped
    ));
    output.push_str(&format!("Records analyzed: {}\n", report.records_analyzed));
    output.push_str(&format!("Distinct dates: {}\n", report.trend_points));
    output.push_str(&format!("Trend chart: {}\n", report.trend_chart.display()));
    output.push_str(&format!(
        "Scatter chart: {}\n",
        report.scatter_chart.display()
    ));
    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
