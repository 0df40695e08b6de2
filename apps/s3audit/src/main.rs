//! s3audit — audit S3 buckets against CIS benchmark security rules.
//!
//! Enumerates the buckets of the calling account, gathers each bucket's
//! security configuration, evaluates it with `s3audit-core`, and renders the
//! resulting reports.
//!
//! # Usage
//!
//! ```text
//! s3audit audit                 # human-readable report for every bucket
//! s3audit audit -o json         # same reports as a JSON array
//! s3audit audit --prefix prod-  # only buckets starting with "prod-"
//! s3audit list                  # bucket names and creation dates
//! ```
//!
//! Credentials and region are resolved the standard way (environment,
//! profile, instance metadata). `RUST_LOG` overrides the log filter;
//! `--debug` forces debug-level logging.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use s3audit_aws::AwsAuditor;
use s3audit_output::{CsvPrinter, JsonPrinter, NooutPrinter, ReportPrinter, TextPrinter};

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "s3audit",
    version,
    about = "Audit S3 buckets against CIS benchmark rules"
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Audit S3 buckets against applicable CIS benchmark items.
    Audit {
        /// Report output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Txt)]
        output: OutputFormat,

        /// Only audit buckets whose name starts with this prefix.
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// List S3 buckets.
    List,
}

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text, one block per bucket.
    Txt,
    /// Pretty-printed JSON array.
    Json,
    /// Comma-separated rows with a header line.
    Csv,
    /// Suppress output entirely.
    Noout,
}

impl OutputFormat {
    fn printer(self) -> Box<dyn ReportPrinter> {
        match self {
            Self::Txt => Box::new(TextPrinter),
            Self::Json => Box::new(JsonPrinter),
            Self::Csv => Box::new(CsvPrinter),
            Self::Noout => Box::new(NooutPrinter),
        }
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `--debug` wins over `RUST_LOG`, which wins over the `info` default.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Gather facts for every bucket, evaluate them, and render the reports.
async fn run_audit(
    auditor: &AwsAuditor,
    output: OutputFormat,
    prefix: Option<&str>,
) -> Result<()> {
    let buckets = auditor.list_buckets(prefix).await?;
    info!(count = buckets.len(), "auditing buckets");

    let mut reports = Vec::with_capacity(buckets.len());
    for bucket in &buckets {
        let facts = auditor.bucket_facts(&bucket.name).await;
        reports.push(s3audit_core::evaluate(facts));
    }

    let mut stdout = io::stdout().lock();
    output
        .printer()
        .print_report(&reports, &mut stdout)
        .context("cannot write report")
}

/// Print bucket creation dates, names, and a total count.
async fn run_list(auditor: &AwsAuditor) -> Result<()> {
    let buckets = auditor.list_buckets(None).await?;
    info!(count = buckets.len(), "received buckets");

    println!("Creation date  Bucket name");
    for bucket in &buckets {
        let date = bucket
            .creation_date
            .map_or_else(|| "----------".to_owned(), |d| d.format("%Y-%m-%d").to_string());
        println!("   {date}  {}", bucket.name);
    }
    println!("{} buckets overall", buckets.len());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let auditor = AwsAuditor::connect()
        .await
        .context("failed to load AWS configuration")?;

    match cli.command {
        Command::Audit { output, prefix } => {
            run_audit(&auditor, output, prefix.as_deref()).await
        }
        Command::List => run_list(&auditor).await,
    }
}
