mod cli;
mod config;
mod engine;
mod export;
mod ingest;
mod models;
mod results;
mod scoring;
mod single;
mod types;

use std::fs::File;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{BulkArgs, Cli, Command, PredictArgs};
use crate::config::ClientConfig;
use crate::engine::{load_batch, BulkPipeline};
use crate::export::{default_export_filename, export_results, sample_transactions, write_csv, ExportError};
use crate::results::ResultStore;
use crate::scoring::HttpScoringClient;
use crate::single::{SingleInput, SinglePredictor};

const SAMPLE_FILENAME: &str = "sample_transactions.csv";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let config = ClientConfig::default()
        .with_base_url(cli.api_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs))
        .with_max_file_bytes(cli.max_file_bytes);

    match cli.command {
        Command::Bulk(args) => run_bulk(&config, args).await,
        Command::Predict(args) => run_predict(&config, args).await,
        Command::Validate { file } => run_validate(&config, &file).await,
        Command::Sample { output } => {
            let written = write_csv(open_output(output.as_deref(), SAMPLE_FILENAME)?, &sample_transactions())?;
            info!("Wrote [{written}] sample transactions");
            Ok(())
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Results may be redirected from stdout, so logging always goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn require_email(email: &str) -> Result<&str> {
    let email = email.trim();

    if email.is_empty() {
        bail!("An email is required to submit predictions (--email or FRAUD_USER_EMAIL)");
    }

    Ok(email)
}

async fn run_bulk(config: &ClientConfig, args: BulkArgs) -> Result<()> {
    let email = require_email(&args.email)?;
    let pipeline = BulkPipeline::new(HttpScoringClient::new(config)?, config);
    let mut store = ResultStore::new();

    let timer = Instant::now();
    let outcome = pipeline.run_file(&args.file, email).await?;
    let duration = timer.elapsed();

    info!("Scored [{}] transactions in: {duration:?}", outcome.submitted);

    for rejection in &outcome.rejected {
        eprintln!("Row {}: {}", rejection.row, rejection.reason);
    }

    if !outcome.rejected.is_empty() {
        eprintln!("Skipped {} invalid rows", outcome.rejected.len());
    }

    store.replace(outcome.results, outcome.stats);

    if let Some(stats) = store.stats() {
        eprintln!(
            "Bulk prediction completed: {} successful, {} failed. {} fraud detected ({:.1}% fraud rate)",
            stats.successful, stats.failed, stats.fraud_detected, stats.fraud_rate
        );
    }

    let summary = store.summary();
    eprintln!(
        "Total: {} | Legitimate: {} | Risky: {} | Fraud: {} | Error: {}",
        summary.total, summary.legitimate, summary.risky, summary.fraud, summary.errors
    );

    if store.is_empty() {
        eprintln!("{}", ExportError::Empty);
        return Ok(());
    }

    let filename = default_export_filename();

    if let Some(transaction_id) = args.transaction.as_deref() {
        let Some(result) = store.find(transaction_id) else {
            bail!("Transaction [{transaction_id}] is not in the scored batch");
        };

        export_results(open_output(args.output.as_deref(), &filename)?, &[result], args.format)?;
        return Ok(());
    }

    store.set_filter(args.status);
    let filtered = store.filtered();

    if filtered.is_empty() {
        if let Some(status) = store.filter() {
            warn!("No results with status [{status}]");
        }
        eprintln!("{}", ExportError::Empty);
        return Ok(());
    }

    let written = export_results(open_output(args.output.as_deref(), &filename)?, &filtered, args.format)?;

    info!("Exported [{written}] results");

    Ok(())
}

async fn run_predict(config: &ClientConfig, args: PredictArgs) -> Result<()> {
    let email = require_email(&args.email)?;
    let input = SingleInput {
        customer_id: args.customer_id,
        transaction_id: args.transaction_id,
        amount: args.amount,
        kyc_verified: args.kyc_verified,
        account_age_days: args.account_age,
        channel: args.channel,
        datetime: args.datetime
    };

    let predictor = SinglePredictor::new(HttpScoringClient::new(config)?);
    let report = predictor.predict(&input, email).await?;

    let mut output = BufWriter::new(stdout().lock());
    serde_json::to_writer_pretty(&mut output, &report)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

async fn run_validate(config: &ClientConfig, file: &Path) -> Result<()> {
    let batch = load_batch(file, config.max_file_bytes).await?;

    for rejection in &batch.rejected {
        eprintln!("Row {}: {}", rejection.row, rejection.reason);
    }

    eprintln!("{} valid transactions, {} rows skipped", batch.transactions.len(), batch.rejected.len());

    write_csv(open_output(None, "")?, &batch.transactions)?;

    Ok(())
}

/// Stdout when no path is given; a directory gets `default_name` inside it.
fn open_output(path: Option<&Path>, default_name: &str) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(stdout().lock())))
    };

    let path = if path.is_dir() { path.join(default_name) } else { path.to_path_buf() };

    info!("Writing to [{}]", path.display());

    Ok(Box::new(BufWriter::new(File::create(path)?)))
}
