//! Resume scanner: heuristic resume parsing and ATS compatibility scoring

use clap::Parser;
use log::{error, info};
use resume_scanner::cli::{self, Cli, Commands, ConfigAction};
use resume_scanner::config::Config;
use resume_scanner::error::{Result, ScannerError};
use resume_scanner::input::manager::InputManager;
use resume_scanner::output::formatter::ReportGenerator;
use resume_scanner::output::report::{MatchReport, ReportMetadata, ScanReport};
use resume_scanner::parser::ResumeParser;
use resume_scanner::scoring::completeness::CompletenessScorer;
use resume_scanner::scoring::job_match::JobMatcher;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
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

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan {
            resume,
            output,
            save,
            detailed,
        } => {
            info!("Starting resume scan");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ScannerError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut output_config = config.output.clone();
            output_config.format = cli::parse_output_format(&output).map_err(ScannerError::InvalidInput)?;
            output_config.detailed = output_config.detailed || detailed;

            println!("📄 Resume: {}", resume.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;
            info!("Extracted {} characters", resume_text.len());

            let draft = ResumeParser::new().parse(&resume_text);
            let scorer = CompletenessScorer::with_custom_vocabulary(config.scan.extra_keywords.clone())?;
            let ats = scorer.score(&draft)?;

            let report = ScanReport {
                metadata: ReportMetadata::for_document(&resume.to_string_lossy(), &resume_text),
                resume: draft,
                ats,
            };

            let generator = ReportGenerator::new(&output_config);
            let rendered = generator.format_scan(&report)?;
            emit(&rendered, save.as_deref())?;
        }

        Commands::Match {
            resume,
            job,
            output,
            save,
        } => {
            info!("Starting job description match");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ScannerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ScannerError::InvalidInput(format!("Job description file: {}", e)))?;

            let mut output_config = config.output.clone();
            output_config.format = cli::parse_output_format(&output).map_err(ScannerError::InvalidInput)?;

            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;
            let job_text = input_manager.extract_text(&job)?;

            let outcome = JobMatcher::new().match_against(&resume_text, &job_text)?;
            let report = MatchReport::new(
                outcome,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
            );

            let generator = ReportGenerator::new(&output_config);
            let rendered = generator.format_match(&report)?;
            emit(&rendered, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                if config.scan.extra_keywords.is_empty() {
                    println!("Extra scan keywords: (none)");
                } else {
                    println!("Extra scan keywords: {}", config.scan.extra_keywords.join(", "));
                }
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Print the rendered report, or write it to `save` when given.
fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
