use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_MAX_FILE_BYTES, DEFAULT_TIMEOUT_SECS};
use crate::export::ExportFormat;
use crate::models::ResultStatus;

#[derive(Debug, Parser)]
#[command(name = "bulk-fraud-scorer", version, about = "Score transactions for fraud against a remote prediction API")]
pub struct Cli {
    /// Base URL of the scoring service.
    #[arg(long, env = "FRAUD_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "FRAUD_API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Uploads larger than this are refused before they are read.
    #[arg(long, env = "FRAUD_MAX_FILE_BYTES", default_value_t = DEFAULT_MAX_FILE_BYTES, global = true)]
    pub max_file_bytes: u64,

    /// One of error, warn, info, debug, trace.
    #[arg(long, default_value = "error", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every valid row of a CSV file in one batch.
    Bulk(BulkArgs),
    /// Score a single transaction and print a JSON report.
    Predict(PredictArgs),
    /// Parse and validate a CSV file without contacting the service.
    Validate {
        file: PathBuf
    },
    /// Write an example input file.
    Sample {
        /// File or directory to write to (stdout when omitted).
        #[arg(long)]
        output: Option<PathBuf>
    }
}

#[derive(Debug, Args)]
pub struct BulkArgs {
    pub file: PathBuf,

    /// Identity the batch is submitted for.
    #[arg(long, env = "FRAUD_USER_EMAIL")]
    pub email: String,

    /// Only export results with this status (Error, Fraud, Risky, Legitimate).
    #[arg(long)]
    pub status: Option<ResultStatus>,

    /// Export only the result for this transaction id.
    #[arg(long)]
    pub transaction: Option<String>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Report)]
    pub format: ExportFormat,

    /// File or directory to write to (stdout when omitted).
    #[arg(long)]
    pub output: Option<PathBuf>
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, env = "FRAUD_USER_EMAIL")]
    pub email: String,

    #[arg(long)]
    pub customer_id: String,

    /// Generated when omitted.
    #[arg(long)]
    pub transaction_id: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    #[arg(long)]
    pub kyc_verified: bool,

    #[arg(long, allow_negative_numbers = true)]
    pub account_age: i64,

    /// Online, ATM, POS or Mobile.
    #[arg(long, default_value = "Online")]
    pub channel: String,

    /// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM`; defaults to now.
    #[arg(long)]
    pub datetime: Option<String>
}
