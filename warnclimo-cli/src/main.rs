//! warnclimo - warning climatology chart generator

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use warnclimo_common::{init_logging, LoggingConfig};
use warnclimo_config::{Config, ConfigLoader};
use warnclimo_graphs::{load_warnings, ChartStyle, ClimatologyAggregator, ClimatologyChart};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("loading configuration")?,
    };

    let level = args
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(LoggingConfig {
        level,
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    run(&config)
}

/// The linear pipeline: load warnings, count per calendar date, render one
/// chart per configured product plus the combined "all" chart.
fn run(config: &Config) -> Result<()> {
    let records = load_warnings(&config.input.warnings_file)
        .with_context(|| format!("loading warnings from {}", config.input.warnings_file))?;
    info!(
        records = records.len(),
        office = %config.office.code,
        "loaded warning records"
    );

    let aggregator = ClimatologyAggregator::new(config.office.products.clone());
    let series = aggregator.aggregate(&records)?;

    let style = ChartStyle {
        width: config.chart.width,
        height: config.chart.height,
        y_max: config.chart.y_max,
        ..ChartStyle::default()
    };
    let output_dir = Path::new(&config.chart.output_dir);

    for s in &series {
        let chart = ClimatologyChart::new(
            s,
            &config.office.code,
            &config.office.period_start,
            &config.office.period_end,
        )
        .with_style(style.clone());
        let path = chart.output_path(output_dir);
        chart
            .render_to_file(&path)
            .with_context(|| format!("rendering chart for series '{}'", s.name))?;
    }

    info!(charts = series.len(), "climatology run complete");
    Ok(())
}
