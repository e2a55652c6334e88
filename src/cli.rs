//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;

use crate::config::WallistConfig;

#[derive(Parser, Debug)]
#[command(name = "egd-wallist")]
#[command(about = "Build a rated wallist report for a European Go Database tournament")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Tournament PIN, e.g. T230101A (prompted for when omitted)
    #[arg(value_name = "TOURNAMENT_PIN")]
    pub tournament: Option<String>,

    /// Directory the <PIN>.txt report is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON config file (defaults to <config dir>/egd-wallist/config.json if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the tournament card URL
    #[arg(long, value_name = "URL")]
    pub tournament_card_url: Option<String>,

    /// Override the player card URL
    #[arg(long, value_name = "URL")]
    pub player_card_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level for the `egd_wallist` target
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Apply CLI overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: WallistConfig) -> WallistConfig {
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if let Some(url) = &self.tournament_card_url {
            config = config.with_tournament_card_url(url.clone());
        }
        if let Some(url) = &self.player_card_url {
            config = config.with_player_card_url(url.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }
        if self.no_progress {
            config = config.without_progress();
        }
        config
    }
}

/// Interactive PIN prompt and per-player status output
pub mod console {
    use anyhow::{Context, Result};
    use colored::*;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::io::{self, BufRead, Write};

    use crate::models::{DisplayClassification, PlayerRecord};
    use crate::rating::StatusSink;

    /// Ask for the tournament PIN on stdin
    pub fn prompt_tournament_pin() -> Result<String> {
        let stdin = io::stdin();
        prompt_tournament_pin_from(&mut stdin.lock(), &mut io::stdout())
    }

    pub fn prompt_tournament_pin_from<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
    ) -> Result<String> {
        write!(output, "{}", "Please, enter tournament PIN: ".bright_white())
            .context("Failed to write prompt")?;
        output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("Failed to read user input")?;

        let pin = line.trim();
        if pin.is_empty() {
            anyhow::bail!("No tournament PIN entered");
        }
        Ok(pin.to_string())
    }

    /// Status line for one player, colored by classification
    pub fn status_line(record: &PlayerRecord, classification: &DisplayClassification) -> String {
        let tag = match classification {
            DisplayClassification::Resolved(rating) => rating.bright_blue(),
            DisplayClassification::NoIdentifierNoGames => classification.to_string().yellow(),
            DisplayClassification::NoIdentifier => classification.to_string().red(),
        };
        format!("{}: {}", record.full_name(), tag)
    }

    /// Prints player status lines, through a progress bar when enabled
    pub struct ConsoleStatus {
        progress: Option<ProgressBar>,
    }

    impl ConsoleStatus {
        pub fn new(show_progress: bool) -> Self {
            let progress = show_progress.then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} [{elapsed_precise}] {pos} players {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb.set_message("fetching ratings...");
                pb
            });
            Self { progress }
        }

        pub fn finish(&self) {
            if let Some(pb) = &self.progress {
                pb.finish_and_clear();
            }
        }
    }

    impl StatusSink for ConsoleStatus {
        fn player(&mut self, record: &PlayerRecord, classification: &DisplayClassification) {
            let line = status_line(record, classification);
            match &self.progress {
                Some(pb) => {
                    pb.println(line);
                    pb.inc(1);
                }
                None => eprintln!("{}", line),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Cursor;

        #[test]
        fn test_prompt_reads_trimmed_pin() {
            colored::control::set_override(false);
            let mut input = Cursor::new("  T230101A \n");
            let mut output = Vec::new();

            let pin = prompt_tournament_pin_from(&mut input, &mut output).unwrap();

            assert_eq!(pin, "T230101A");
            assert_eq!(String::from_utf8(output).unwrap(), "Please, enter tournament PIN: ");
        }

        #[test]
        fn test_prompt_rejects_empty_input() {
            let mut input = Cursor::new("\n");
            let mut output = Vec::new();
            assert!(prompt_tournament_pin_from(&mut input, &mut output).is_err());
        }
    }
}
