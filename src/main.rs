mod config;
mod engine;
mod models;
mod report;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Configuration;
use crate::engine::TransactionGenerator;
use crate::models::Catalog;
use crate::report::{write_report_file, Metrics};
use crate::types::group_digits;

fn main() -> Result<()> {
    println!("Loading configuration...");
    let config = Configuration::default();

    setup_logging(config.log_level);

    let timer = Instant::now();

    println!("1. Creating product catalog...");
    let catalog = Catalog::build(&config.categories);
    info!(
        "Catalog built with {} products across {} categories",
        catalog.len(),
        config.categories.len()
    );

    println!("2. Generating transaction data...");
    let mut generator = TransactionGenerator::new(
        &config.categories,
        &catalog,
        config.period,
        config.seed,
    )?;
    let transactions = generator.generate(
        config.num_transactions,
        config.num_customers,
        config.max_items_per_transaction,
    )?;

    println!("3. Writing transactions to file...");
    let written = write_report_file(&config.output_filename, &transactions)?;
    println!(
        "4. Successfully wrote {} transactions to '{}'",
        group_digits(written as u64),
        config.output_filename
    );

    println!("5. Calculating final metrics...");
    write_metrics_to_stdout(&Metrics::calculate(&transactions))?;

    let duration = timer.elapsed();
    info!("Generated and reported transactions in: {duration:?}");

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the progress lines and the metrics block, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_metrics_to_stdout(metrics: &Metrics) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output)?;
    metrics.write_summary(&mut output)?;
    output.flush()?;

    Ok(())
}
