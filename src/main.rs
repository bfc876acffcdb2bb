use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use reading_optimizer::{
    analyze, handle, logging, smart_settings, Config, Library, OptimizeRequest, ReadingNeed,
    Settings,
};

#[derive(Parser)]
#[command(
    name = "reading-optimizer",
    about = "Score text readability and recommend reading settings",
    version
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Readability analysis of files (reads stdin if none provided)
    Analyze { files: Vec<PathBuf> },

    /// Analyze text or a stored file and recommend settings
    Optimize {
        /// Text to analyze
        #[arg(long)]
        text: Option<String>,

        /// Stored file id from the configured library
        #[arg(long)]
        file_id: Option<i64>,

        /// Caller identity used for file ownership checks
        #[arg(long, default_value_t = 0)]
        owner: i64,

        /// Current settings as a JSON object
        #[arg(long)]
        settings: Option<String>,
    },

    /// CSS variables for a reading-need profile
    Profile {
        /// general, dyslexia, adhd or visual
        #[arg(default_value = "general")]
        need: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init(level)?;

    match cli.command {
        Command::Analyze { files } => {
            if files.is_empty() {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("reading stdin")?;
                print_json(&analyze(&input))?;
            } else {
                for path in &files {
                    let text = std::fs::read_to_string(path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    print_json(&analyze(&text))?;
                }
            }
        }
        Command::Optimize {
            text,
            file_id,
            owner,
            settings,
        } => {
            let current_settings: Settings = match settings {
                Some(raw) => serde_json::from_str(&raw)
                    .context("--settings must be a JSON object")?,
                None => Settings::new(),
            };
            let request = OptimizeRequest {
                file_id,
                text,
                current_settings,
            };
            let library = Library::from_config(&config);
            let report = handle(&request, owner, &library, &config)?;
            print_json(&report)?;
        }
        Command::Profile { need } => {
            let need: ReadingNeed = need.parse()?;
            print_json(&smart_settings(need))?;
        }
    }
    Ok(())
}
