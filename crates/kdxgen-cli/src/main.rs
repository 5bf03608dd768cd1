mod commands;
mod logging;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use kdxgen_core::{CollectionEngine, Diagnostics};
use tracing::{error, info, warn};

/// Forwards core diagnostics to the tracing subscriber.
struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn severe(&self, message: &str) {
        error!("{}", message);
    }
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let mut config = match kdxgen_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate {
            root,
            output,
            max_name_len,
            uppercase_hex,
        }) => {
            if let Some(len) = max_name_len {
                config.max_collection_name_len = len;
            }
            if uppercase_hex {
                config.uppercase_hex = true;
            }
            if let Err(err) = run_generate(config, &root, output) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_generate(
    config: kdxgen_core::AppConfig,
    root: &std::path::Path,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = CollectionEngine::new(config);
    let result = engine.run(root, &TracingDiagnostics)?;

    match output {
        Some(path) => {
            fs::write(&path, &result.json)?;
            info!(
                "{} collections, {} items written to {}",
                format!("{}", result.collections).green(),
                format!("{}", result.items).green(),
                path.display(),
            );
        }
        None => println!("{}", result.json),
    }
    info!(
        "Walk: {}",
        format!("{:.2}s", result.walk_duration.as_secs_f64()).green(),
    );

    Ok(())
}
