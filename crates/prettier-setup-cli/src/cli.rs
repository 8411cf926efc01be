use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prettier-setup",
    version,
    about = "Interactively generate Prettier and editor configuration files"
)]
pub struct Cli {
    /// Directory to write the configuration files into (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Use the standard setup without asking any questions
    #[arg(long, default_value_t = false)]
    pub standard: bool,

    /// Configuration file (defaults to prettier-setup.yaml in the target directory)
    #[arg(long, value_name = "PATH", env = "PRETTIER_SETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
