use cartcheck::cli::Args;
use cartcheck::env_file;
use cartcheck::error::CartcheckError;
use cartcheck::logger::initialize as LoggerInitialize;
use cartcheck::report;

use common::ErrorLocation;

use std::io::stdout;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so .env can supply CARTCHECK_KEYFILE
    let env_file = env_file::load();
    let args = Args::parse();

    match run(args, env_file).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CartcheckError::Logger { .. }) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    args: Args,
    env_file: Result<Option<PathBuf>, dotenvy::Error>,
) -> Result<(), CartcheckError> {
    LoggerInitialize(args.log_level(), args.log_file.as_deref())?;

    match env_file {
        Ok(Some(path)) => info!("Loaded .env from: {}", path.display()),
        Ok(None) => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env: {e}"),
    }

    let config = args.run_config();
    info!(
        "cartcheck starting: key '{}', keyfile {}",
        config.key_name,
        config.keyfile.display()
    );

    let outcome = cart_core::run(&config).await?;

    report::render(&outcome, &mut stdout().lock()).map_err(|e| CartcheckError::Report {
        message: format!("Failed to write report: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(())
}
