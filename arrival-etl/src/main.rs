use std::path::PathBuf;
use std::process::ExitCode;

use arrival_etl::config::{FailurePolicy, JobConfig};
use arrival_etl::driver::{self, WorkUnits};
use arrival_etl::job::TransformJob;
use arrival_etl::store::FsObjectStore;
use arrival_etl::transform::RecordPolicy;
use chrono::NaiveDate;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit status after ctrl-c, as a shell reports SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(
    name = "arrival-etl",
    version,
    about = "Translate realtime arrival snapshots into reporting records"
)]
struct Cli {
    /// Directory whose sub-directories are the buckets
    #[arg(long, env = "ARRIVAL_STORE_ROOT")]
    store_root: PathBuf,

    /// Bucket holding raw feed snapshots
    #[arg(long, env = "ARRIVAL_SOURCE_BUCKET")]
    source_bucket: String,

    /// Bucket receiving translated objects
    #[arg(long, env = "ARRIVAL_DESTINATION_BUCKET")]
    destination_bucket: String,

    /// First day to process (YYYY-MM-DD)
    #[arg(long, default_value = "2023-06-25")]
    start: NaiveDate,

    /// Number of days to process; runs until interrupted if omitted
    #[arg(long)]
    days: Option<usize>,

    /// On a bad event: "abort" the object or "skip" the event
    #[arg(long, default_value = "abort")]
    on_record_error: RecordPolicy,

    /// On a failed object: "abort" the run or "skip" the object
    #[arg(long, default_value = "abort")]
    on_object_error: FailurePolicy,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let store = FsObjectStore::new(&cli.store_root);
    let config = JobConfig::new(cli.source_bucket, cli.destination_bucket)
        .with_record_policy(cli.on_record_error)
        .with_failure_policy(cli.on_object_error);
    let job = TransformJob::new(store, config);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received ctrl-c, stopping after the current work unit");
                on_interrupt.cancel();
            }
            Err(e) => error!(error = %e, "Failed to install ctrl-c handler"),
        }
    });

    info!(
        root = %cli.store_root.display(),
        source = %job.config().source_bucket,
        destination = %job.config().destination_bucket,
        start = %cli.start,
        days = ?cli.days,
        "Starting"
    );

    let units = WorkUnits::starting(cli.start);
    let result = match cli.days {
        Some(days) => driver::run(&job, units.take(days), &cancel).await,
        None => driver::run(&job, units, &cancel).await,
    };

    match result {
        Ok(summary) => {
            info!(
                units = summary.units,
                written = summary.totals.objects_written,
                failed = summary.totals.objects_failed,
                accepted = summary.totals.events_accepted,
                rejected = summary.totals.events_rejected,
                skipped = summary.totals.events_skipped,
                "Run finished"
            );
            if summary.cancelled {
                ExitCode::from(EXIT_INTERRUPTED)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}
