//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use propbrief::adapters::{JsonFileStore, MemoryStore};
use propbrief::api::{Context, CreateContributionRequest};
use propbrief::config::Config;
use propbrief::output::OutputMode;

/// propbrief - Reconcile property data into a single scored brief
#[derive(Parser, Debug)]
#[command(
    name = "propbrief",
    version,
    about = "Reconcile property data into a single scored brief",
    long_about = "Fetch a property's data from every provider, merge it by source priority,\n\
                  flag material disagreements and score how complete the result is.\n\n\
                  Users can submit corrections as contributions for later review."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "PROPBRIEF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.config/propbrief/config.toml)
    #[arg(long, global = true, env = "PROPBRIEF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch every source for an address and build its brief
    Ingest {
        /// Street address
        address: String,
    },

    /// Re-fetch every source for a property and rebuild its brief
    Refresh {
        /// Property ID
        id: u64,
    },

    /// Show a property's current brief
    Brief {
        /// Property ID
        id: u64,
    },

    /// Show the raw source records stored for a property
    Sources {
        /// Property ID
        id: u64,
    },

    /// List ingested properties
    List,

    /// Propose a correction to a brief field
    Contribute {
        /// Property ID
        id: u64,

        /// Field to correct
        #[arg(short, long)]
        field: String,

        /// Proposed value (parsed as JSON when possible, else a string)
        #[arg(long)]
        value: String,

        /// Why the current value is wrong
        #[arg(short, long, default_value = "")]
        reason: String,

        /// Who is submitting
        #[arg(short, long)]
        contributor: String,
    },

    /// List contributions for a property
    Contributions {
        /// Property ID
        id: u64,
    },

    /// Accept or reject a pending contribution
    Review {
        /// Contribution ID
        id: u64,

        /// New status: accepted, rejected
        status: String,
    },

    /// Summarise a property's brief (language model if configured)
    Summary {
        /// Property ID
        id: u64,

        /// Replace the default prompt
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Reconcile a JSON file of `{source: {field: value}}` without storing it
    Reconcile {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("propbrief v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'propbrief --help' for usage");
            println!("Run 'propbrief ingest \"123 Main St\"' to get started");
        }
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;

    match command {
        Command::Reconcile { file } => {
            let ctx = Context::from_config(&config, Box::new(MemoryStore::new()));
            commands::reconcile(&ctx, &file, output_mode)
        },
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("propbrief v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        command => {
            let store = JsonFileStore::in_dir(&config.data_dir(cli.data_dir.as_deref()));
            log::debug!("using store {}", store.path().display());
            let ctx = Context::from_config(&config, Box::new(store));
            dispatch(&ctx, command, output_mode)
        },
    }
}

fn dispatch(ctx: &Context, command: Command, mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Command::Ingest { address } => commands::ingest(ctx, &address, mode),
        Command::Refresh { id } => commands::refresh(ctx, id, mode),
        Command::Brief { id } => commands::brief(ctx, id, mode),
        Command::Sources { id } => commands::sources(ctx, id, mode),
        Command::List => commands::list(ctx, mode),
        Command::Contribute {
            id,
            field,
            value,
            reason,
            contributor,
        } => {
            let req = CreateContributionRequest {
                field,
                proposed_value: commands::parse_value(&value),
                reason,
                contributor,
            };
            commands::contribute(ctx, id, &req, mode)
        },
        Command::Contributions { id } => commands::contributions(ctx, id, mode),
        Command::Review { id, status } => commands::review(ctx, id, &status, mode),
        Command::Summary { id, prompt } => commands::summary(ctx, id, prompt, mode),
        Command::Reconcile { .. } | Command::Version => Ok(()),
    }
}
