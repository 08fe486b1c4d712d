//! scroole CLI - Java value-object generator
//!
//! Commands:
//! - `scroole generate` - Generate Java sources for every declaration
//! - `scroole check` - Parse and generate every declaration without writing
//! - `scroole describe` - Show the parsed description or Java for one file

use anyhow::Context;
use clap::{Parser, Subcommand};
use scroole_build::ScrooleConfig;
use std::path::PathBuf;

mod check;
mod describe;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "scroole")]
#[command(author, version, about = "Generate Java value objects from Scroole declarations", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources for every declaration in the source directory
    Generate {
        /// Directory holding *.scroole files (default: src/main/scroole)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Directory for generated *.java files (default: target/generated-sources/scroole)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to scroole.toml (default: ./scroole.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the declarations that succeed even if others fail
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Parse and generate every declaration without writing any file
    Check {
        /// Directory holding *.scroole files (default: src/main/scroole)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Path to scroole.toml (default: ./scroole.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the description or the generated Java of a single declaration
    Describe {
        /// The *.scroole file
        file: PathBuf,

        /// Fully-qualified class name (default: the file name without suffix)
        #[arg(short, long)]
        name: Option<String>,

        /// Print the parsed description as JSON instead of Java
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Generate { config, .. } | Commands::Check { config, .. } => {
            ScrooleConfig::load(config.as_deref()).context("Failed to load configuration")?
        }
        Commands::Describe { .. } => ScrooleConfig::default(),
    };
    logging::init(&config.log_level, cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate {
            source,
            output,
            config: _,
            keep_going,
        } => {
            generate::run(config, source, output, keep_going)?;
        }
        Commands::Check { source, config: _ } => {
            check::run(config, source)?;
        }
        Commands::Describe { file, name, json } => {
            describe::run(&file, name, json)?;
        }
    }

    Ok(())
}
