use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use migration::runner::{migration_status, revert_last, run_migrations};
use sea_orm::DbErr;
use tracing_subscriber::prelude::*;

use crate::config::MigrationConfig;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply all pending migrations
    Up,
    /// Revert the last applied migration
    Down,
    /// List migrations and whether they are applied
    Status,
    /// Print the declarative migration records as JSON
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::Show = cli.command {
        return show();
    }

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let config = MigrationConfig::from_files(&config_files).expect("Failed creating config");

    initialize_tracing(&config);

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
        .block_on(run(&config, cli.command));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Migration failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &MigrationConfig, command: Command) -> Result<(), DbErr> {
    let db = sea_orm::Database::connect(config.database_url.as_str()).await?;

    match command {
        Command::Up => run_migrations(&db).await,
        Command::Down => revert_last(&db).await,
        Command::Status => {
            for (name, status) in migration_status(&db).await? {
                tracing::info!(migration = %name, ?status);
            }
            Ok(())
        }
        Command::Show => unreachable!("`show` runs without a database"),
    }
}

fn show() -> ExitCode {
    let rendered = migration::changes()
        .map_err(|err| err.to_string())
        .and_then(|changes| {
            serde_json::to_string_pretty(&changes).map_err(|err| err.to_string())
        });

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing_subscriber::fmt().init();
            tracing::error!(%err, "Cannot render migrations");
            ExitCode::FAILURE
        }
    }
}

fn initialize_tracing(config: &MigrationConfig) {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(
                config.trace_level.as_deref().unwrap_or("info"),
            )
        })
        .expect("Failed to create env filter");

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_layer.with(tracing_subscriber::fmt::layer()).init();
    };
}
