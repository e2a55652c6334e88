use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use egd_wallist::cli::Args;
use egd_wallist::cli::console::{ConsoleStatus, prompt_tournament_pin};
use egd_wallist::WallistError;
use egd_wallist::config::WallistConfig;
use egd_wallist::constants::EXIT_FAILURE;
use egd_wallist::egd::EgdClient;
use egd_wallist::processor::WallistProcessor;
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Failed to initialise logging: {:#}", error);
        process::exit(EXIT_FAILURE);
    }

    match run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(exit_code(&error));
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let tournament = match &args.tournament {
        Some(pin) => pin.clone(),
        None => prompt_tournament_pin()?,
    };

    let client = EgdClient::new(&config).context("Failed to create HTTP client")?;
    let processor = WallistProcessor::new(client, config);

    let mut status = ConsoleStatus::new(processor.config().show_progress);
    let result = processor.run(&tournament, &mut status);
    status.finish();
    let outcome = result?;

    let stats = &outcome.stats;
    eprintln!(
        "{} {} players ({} rated, {} without PIN, {} without PIN or games), {} rounds -> {}",
        "Done:".bright_green().bold(),
        stats.players,
        stats.resolved,
        stats.unrated,
        stats.unrated_no_games,
        stats.round_count,
        outcome.report_path.display()
    );

    print!("{}", outcome.report);
    Ok(())
}

/// Data errors exit with their own status so scripts can tell them apart
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<WallistError>())
        .map_or(EXIT_FAILURE, WallistError::exit_code)
}

/// Defaults -> config file -> environment -> command line
fn load_configuration(args: &Args) -> Result<WallistConfig> {
    let default_path = WallistConfig::default_config_path()
        .ok()
        .filter(|path| path.exists());
    let config_file = args.config.clone().or(default_path);

    if let Some(path) = &config_file {
        debug!("Using config file: {}", path.display());
    }

    let config = WallistConfig::load_layered(config_file.as_deref())
        .context("Failed to load configuration")?;
    let config = args.apply_overrides(config);
    config.validate()?;
    Ok(config)
}

fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("egd_wallist={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egd_wallist::constants::EXIT_DATA_ERROR;

    #[test]
    fn test_exit_code_follows_wrapped_error() {
        let data = anyhow::Error::new(WallistError::RatingNotFound {
            tournament_id: "T230101A".to_string(),
            player_id: "99999999".to_string(),
        });
        assert_eq!(exit_code(&data), EXIT_DATA_ERROR);

        let wrapped = data.context("Run failed");
        assert_eq!(exit_code(&wrapped), EXIT_DATA_ERROR);

        let config = anyhow::Error::new(WallistError::configuration("timeout must be positive"))
            .context("Failed to load configuration");
        assert_eq!(exit_code(&config), EXIT_FAILURE);

        assert_eq!(exit_code(&anyhow::anyhow!("No tournament PIN entered")), EXIT_FAILURE);
    }
}
