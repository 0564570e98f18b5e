//! vietcal-seed: populate the `foods` collection with the built-in catalog.
//!
//! Writes are idempotent merges, so re-running against an already-seeded
//! store is safe; only the first run assigns `createdAt`.

mod output;

use clap::Parser;
use std::sync::Arc;
use vietcal_core::error::InitializationError;
use vietcal_core::{catalog, exit_codes};
use vietcal_store::{BulkUpserter, HttpStore, StoreConfig, UpsertReport, UpsertStatus};

#[derive(Parser)]
#[command(name = "vietcal-seed")]
#[command(about = "Seed the VietCal foods collection with the built-in catalog")]
#[command(version)]
struct Cli {
    /// Target the local store emulator instead of production
    #[arg(long)]
    emulator: bool,

    /// Override the store endpoint URL
    #[arg(long, value_name = "URL")]
    store_url: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let telemetry = if cli.verbose {
        vietcal_telemetry::TelemetryConfig::verbose()
    } else {
        vietcal_telemetry::TelemetryConfig::default()
    };
    vietcal_telemetry::init_with_config(telemetry)?;

    let report = match run(&cli).await {
        Ok(report) => report,
        Err(e) => {
            output::Status::error(&e.to_string());
            if let Some(source) = std::error::Error::source(&e) {
                output::Status::error(&format!("  caused by: {source}"));
            }
            std::process::exit(exit_codes::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        print_report(&report);
    }

    // full-batch success only; any failed record is a non-zero exit
    let code = if report.is_full_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    };
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<UpsertReport, InitializationError> {
    let mut config = if cli.emulator {
        output::Status::info("Using local store emulator at localhost:8080");
        StoreConfig::emulator()
    } else {
        StoreConfig::from_env().map_err(|e| {
            InitializationError::new("loading store configuration failed").with_source(e)
        })?
    };
    if let Some(ref url) = cli.store_url {
        config = config.with_base_url(url.clone());
    }

    let store = HttpStore::new(config)
        .map_err(|e| InitializationError::new("building store client failed").with_source(e))?;
    let upserter = BulkUpserter::new(Arc::new(store));

    let foods = catalog::seed_foods();
    output::Status::info(&format!("Seeding {} foods", foods.len()));
    Ok(upserter.upsert_all(&foods).await)
}

fn print_report(report: &UpsertReport) {
    for outcome in &report.outcomes {
        match outcome.status {
            UpsertStatus::Created => output::Status::success(&format!("{} created", outcome.id)),
            UpsertStatus::Updated => output::Status::success(&format!("{} updated", outcome.id)),
            UpsertStatus::Failed => {
                let cause = outcome
                    .error
                    .as_ref()
                    .map_or_else(|| "unknown error".to_string(), ToString::to_string);
                output::Status::error(&format!("{} failed: {cause}", outcome.id));
            }
        }
    }

    if report.is_full_success() {
        output::Status::success(&format!(
            "Seeding complete: {} created, {} updated",
            report.created(),
            report.updated()
        ));
    } else {
        output::Status::error(&format!(
            "Seeding finished with failures: {} created, {} updated, {} failed",
            report.created(),
            report.updated(),
            report.failed()
        ));
    }
}
