mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use profile_form::config::DEFAULT_CONFIG_FILE;
use profile_form::FormConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "profile-form")]
#[command(version, about = "Profile form - validate, submit and render user profile values", long_about = None)]
struct Cli {
    /// Config file (TOML); defaults are used when it does not exist
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON value file ("-" reads stdin)
    Validate {
        /// Values file
        file: PathBuf,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON value file through the submission gate
    Submit {
        /// Values file
        file: PathBuf,
    },

    /// Render the form as HTML
    Render {
        /// Values file; every field is treated as touched when given
        file: Option<PathBuf>,
    },

    /// List fields, their rules and option sets
    Fields,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = FormConfig::load(&cli.config)?;
    debug!(?config, "loaded configuration");

    // Execute command
    let success = match cli.command {
        Commands::Validate { file, json } => commands::validate::execute(&file, &config, json)?,
        Commands::Submit { file } => commands::submit::execute(&file, &config)?,
        Commands::Render { file } => commands::render::execute(file.as_deref(), &config)?,
        Commands::Fields => commands::fields::execute(&config)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
