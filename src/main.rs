//! Job ranker: score job postings against a resume and rank them

mod cli;
mod config;
mod error;
mod input;
mod job;
mod output;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{JobRankerError, Result};
use log::{error, info};
use output::{ConsoleFormatter, JsonFormatter};
use scoring::JobRanker;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            jobs,
            resume,
            output,
            detailed,
            top,
            save,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| JobRankerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| JobRankerError::InvalidInput(format!("Jobs file: {}", e)))?;

            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(JobRankerError::InvalidInput)?
                }
                None => config.output.format,
            };

            let resume_text = input::load_resume(&resume)?;
            let batch = input::load_jobs(&jobs)?;

            let ranker = JobRanker::with_custom_terms(&config.vocabulary.additional_skills)?;
            info!("Scoring {} postings against the resume", batch.len());
            let ranked = ranker.enrich_and_rank(batch, &resume_text);

            if let Some(path) = save {
                input::save_jobs(&path, &ranked)?;
            }

            match output_format {
                OutputFormat::Console => {
                    let detailed = detailed || config.output.detailed;
                    let top = top.or(config.output.top);

                    // breakdowns are recomputed for display only; scoring
                    // is pure, so this mirrors the attached results
                    let breakdowns: Vec<_> = if detailed {
                        ranked
                            .iter()
                            .map(|job| ranker.score_job(job, &resume_text))
                            .collect()
                    } else {
                        Vec::new()
                    };

                    let formatter =
                        ConsoleFormatter::new(config.output.color_output, detailed, top);
                    print!("{}", formatter.format(&ranked, &breakdowns));
                }
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(true).format(&ranked)?);
                }
            }

            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    JobRankerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("# {}", Config::config_path().display());
                print!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}
