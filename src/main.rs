mod catalog;
mod location;
mod session;
mod web;

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::process::ExitCode;

use crate::catalog::{aggregator, datasets, FileStore};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "wavedir")]
#[command(about = "Radio frequency directory service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web service
    Serve {
        #[arg(long, default_value = "wavedir.yaml")]
        config: String,
    },
    /// Validate the static catalog datasets
    Check,
    /// Print the aggregated catalog as JSON
    Export {
        #[arg(long, default_value = "wavedir.yaml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Check => check(),
        Commands::Export { config } => export(&config),
    }
}

async fn serve(config_path: &str) -> ExitCode {
    let config = match Config::from_file(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn check() -> ExitCode {
    let records = datasets::all();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut failures = 0usize;
    for record in &records {
        if !seen.insert(&record.id) {
            eprintln!("Duplicate id: {}", record.id);
            failures += 1;
        }
        if record.frequency.trim().is_empty() {
            eprintln!("{}: empty frequency", record.id);
            failures += 1;
        }
        if record.name.trim().is_empty() {
            eprintln!("{}: empty name", record.id);
            failures += 1;
        }
        if record.location.name.trim().is_empty() {
            eprintln!("{}: empty location name", record.id);
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("Catalog check failed ({} problems)", failures);
        return ExitCode::FAILURE;
    }

    println!("Catalog is valid ({} records)", records.len());
    for (name, count) in datasets::dataset_counts() {
        println!("  {}: {} records", name, count);
    }
    ExitCode::SUCCESS
}

fn export(config_path: &str) -> ExitCode {
    let config = match Config::from_file(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let store = FileStore::new(config.storage.data_folder);
    let records =
        aggregator::update_activity_status(&aggregator::all_frequencies(&store), Utc::now());

    match serde_json::to_string_pretty(&records) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
