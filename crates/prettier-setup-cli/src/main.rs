mod cli;
mod prompt;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prettier_setup_core::{
    CONFIG_FILE_NAME, CommandFormatter, SetupMode, SetupOutcome, SetupSession, load_config,
};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use prompt::DialoguerPrompt;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Logs share stderr with the dialoguer prompts, so the default level stays at `warn`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<SetupOutcome> {
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve the current directory")?,
    };
    anyhow::ensure!(
        root.is_dir(),
        "target directory {} does not exist",
        root.display()
    );

    let config_path: PathBuf = cli
        .config
        .clone()
        .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
    let config = load_config(&config_path)?;
    tracing::info!(
        config = %config_path.display(),
        formatter = %config.formatter.display(),
        "configuration loaded"
    );

    let mut session = SetupSession::new(
        DialoguerPrompt::new(),
        CommandFormatter::new(config.formatter),
        &root,
    );
    if cli.standard {
        session = session.with_mode(SetupMode::Standard);
    }

    let outcome = session
        .run(|event| ui::print_progress(&event))
        .with_context(|| format!("setup in {} failed", root.display()))?;
    Ok(outcome)
}
