//! recap - Extractive summaries for meeting transcripts
//!
//! Entry point for the recap CLI application.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use recap::cli::commands::{self, SummarizeOptions};
use recap::cli::{Cli, Commands};
use recap::config::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            recap::cli::completions::print(shell);
            ExitCode::SUCCESS
        }
        command => {
            // Load configuration only for runtime commands.
            let mut settings = match Settings::load() {
                Ok(settings) => settings,
                Err(err) => {
                    eprintln!("Error: {:#}", err);
                    return ExitCode::FAILURE;
                }
            };

            recap::logging::init(
                &settings.general.log_level,
                cli.verbose,
                Some(&settings.log_dir()),
            );

            match Settings::config_path() {
                Ok(path) if path.exists() => {
                    tracing::debug!("Loaded config from {}", path.display())
                }
                _ => tracing::debug!("No config file found, using defaults"),
            }
            settings.apply_env_overrides();

            match run(command, &settings).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    tracing::error!("{:#}", err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn run(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Summarize {
            input,
            sentences,
            language,
            output,
            generate_sample,
            json,
        } => {
            let options = SummarizeOptions {
                input,
                sentences,
                language,
                output,
                generate_sample,
                json,
            };
            commands::summarize_file(settings, options)?;
        }
        Commands::Batch {
            input_dir,
            output_dir,
            sentences,
        } => {
            commands::run_batch(settings, input_dir, output_dir, sentences).await?;
        }
        Commands::Sample { path } => {
            commands::write_sample(&path)?;
            println!("Sample transcript written to: {}", path.display());
        }
        Commands::Doctor { json } => {
            commands::run_doctor(settings, json)?;
        }
        Commands::Config(config_cmd) => {
            commands::config_command(settings, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
