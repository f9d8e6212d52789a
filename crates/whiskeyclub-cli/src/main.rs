use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{eyre, Context};
use commands::{config, review};
use std::path::PathBuf;
use whiskeyclub_config::{Config, PathManager};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "whiskeyclub")]
#[command(about = "WhiskeyClub - build and inspect spirit review documents")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build or inspect review documents
    Review {
        #[command(subcommand)]
        cmd: ReviewCommands,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Build a new review and print its stored document
    #[command(long_about = "Build a new review and print the document that would be stored for it, including the partition keys for the Reviews, Spirits and Users containers. Author fields fall back to the [author] section of the configuration.")]
    New {
        /// Review identifier
        #[arg(long)]
        id: String,

        /// Identifier of the reviewed spirit
        #[arg(long)]
        spirit_id: Option<String>,

        /// Name of the reviewed spirit
        #[arg(long)]
        spirit_name: Option<String>,

        /// Author's user identifier
        #[arg(long)]
        author_id: Option<String>,

        /// Author's display name
        #[arg(long)]
        author_name: Option<String>,
    },
    /// Read a stored review document and show its partition keys
    Inspect {
        /// JSON file holding a single document
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_file = match cli.config {
        Some(path) => path,
        None => PathManager::new().map_err(|e| eyre!("{}", e))?.config_file(),
    };
    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("{}", e))
        .wrap_err_with(|| format!("Failed to load config from {}", config_file.display()))?;
    config.validate().map_err(|e| eyre!("{}", e))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging).map_err(|e| eyre!("{}", e))?;
    tracing::debug!(path = %config_file.display(), "Configuration loaded");

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Review { cmd } => review::run_review(cmd, &config, &output),
        Commands::Config { cmd } => config::run_config(cmd, &config, &config_file, &output),
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}
