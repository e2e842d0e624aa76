mod app;
mod commands;
mod config;
mod event;
mod fixture;
mod logging;
mod runtime;
mod ui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use signline_storage::{SettingsStore, paths};

use crate::config::{AppConfig, ConfigOverrides};

#[derive(Parser)]
#[command(name = "signline", about = "Sign-to-speech subtitles", version)]
struct Cli {
    /// Config file; defaults to the platform config directory
    #[arg(long, global = true, env = "SIGNLINE_CONFIG")]
    config: Option<String>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded session and print the committed sentences
    Replay(commands::replay::Args),
    /// Sign with the keyboard in an interactive terminal UI
    Tui(commands::tui::Args),
    /// Inspect or initialize the config file
    Config {
        #[command(subcommand)]
        action: commands::config::Action,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Tui(args) => Some(args.log_file()),
        _ => None,
    };
    logging::init(log_file.as_deref()).context("failed to open log file")?;

    let store = match cli.config.as_deref() {
        Some(path) => SettingsStore::new(paths::expand_path(path)),
        None => SettingsStore::platform_default().context("no config directory")?,
    };

    let mut config = AppConfig::load(&store)
        .with_context(|| format!("failed to load {}", store.path().display()))?;
    config.apply(&cli.overrides);

    match cli.command {
        Commands::Replay(args) => commands::replay::run(args, &config),
        Commands::Tui(args) => commands::tui::run(args, config).await,
        Commands::Config { action } => commands::config::run(action, &store, &config),
    }
}
