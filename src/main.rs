use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::{debug, info};

use ytsum::pipeline::Pipeline;
use ytsum::summarize::{API_KEY_ENV, DEFAULT_MODEL, GeminiClient, GeminiConfig};
use ytsum::youtube::InnerTubeTranscripts;

mod cli;

use cli::Cli;

const DEFAULT_LANG: &str = "en";

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let key_line = if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.is_empty()) {
        format!("  \x1b[32m✅\x1b[0m {API_KEY_ENV}")
    } else {
        format!("  \x1b[31m❌\x1b[0m {API_KEY_ENV}  (not set, summaries will fail)")
    };

    let log_path = log_dir().join("ytsum.log");

    format!(
        "\nREQUIRED ENVIRONMENT:\n{key_line}\n\nLogs are written to: {}",
        log_path.display()
    )
}

fn read_url(cli: &Cli) -> Result<String> {
    if let Some(ref url) = cli.url {
        return Ok(url.clone());
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    let url = read_url(&cli)?;

    if cli.check {
        if ytsum::validate_youtube_url(url.trim()) {
            println!("Valid YouTube URL");
            return Ok(());
        }
        bail!("Invalid YouTube URL");
    }

    // CLI flags take priority over the config file
    let languages = if !cli.lang.is_empty() {
        cli.lang.clone()
    } else {
        config
            .languages
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_LANG.to_string()])
    };
    let model = cli
        .model
        .clone()
        .or(config.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let output_dir = cli.output_dir.clone().or(config.output_dir.clone());

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }
    debug!("Languages: {languages:?}, model: {model}");

    let client = reqwest::Client::new();
    let pipeline = Pipeline::new(
        InnerTubeTranscripts::new(client.clone()),
        GeminiClient::new(client, GeminiConfig::from_env(model)),
        languages,
    );

    let verbose = cli.verbose;
    let report = pipeline
        .run(&url, |stage| {
            if let (true, Some(status)) = (verbose, stage.status()) {
                eprintln!("[{:>3}%] {status}", stage.progress());
            }
        })
        .await?;

    if cli.verbose {
        eprintln!("{}", report.label);
    }

    println!("--- Summary ---\n{}", report.summary_text());

    if cli.show_transcript {
        println!("\n--- Transcript ---\n{}", report.transcript_text);
    }

    if let Some(ref dir) = output_dir {
        let paths = ytsum::output::write_artifacts(dir, &report)?;
        if cli.verbose {
            for path in paths {
                eprintln!("Output written to: {}", path.display());
            }
        }
    }

    Ok(())
}
