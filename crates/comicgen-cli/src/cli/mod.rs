//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use comicgen_core::config::{self, Config};
use comicgen_core::references::ReferenceCategory;
use comicgen_core::store::PromptStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "comicgen")]
#[command(version)]
#[command(about = "4-Panel Comic Prompt Generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render a comic record into a generator-ready prompt
    Generate {
        /// Path to a record JSON file (defaults to the built-in example)
        #[arg(long, value_name = "FILE")]
        record: Option<String>,

        /// Save the record (with its generated prompt) to the prompt store
        #[arg(long)]
        save: bool,

        /// Mark the record as approved when saving
        #[arg(long, requires = "save")]
        approve: bool,
    },
    /// Print the built-in example record as JSON (edit it, then `generate --record`)
    Example,
    /// Manage saved prompts
    Prompts {
        #[command(subcommand)]
        command: PromptCommands,
    },
    /// Show reference image previews for style terms
    Refs {
        /// Limit output to one category
        #[arg(long, value_enum)]
        category: Option<RefCategoryArg>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum PromptCommands {
    /// List saved prompts, newest first
    List,
    /// Print the generated prompt text of a saved record
    Show { id: String },
    /// Delete a saved prompt
    Delete { id: String },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RefCategoryArg {
    Composition,
    Style,
    Coloring,
}

impl From<RefCategoryArg> for ReferenceCategory {
    fn from(arg: RefCategoryArg) -> Self {
        match arg {
            RefCategoryArg::Composition => ReferenceCategory::Composition,
            RefCategoryArg::Style => ReferenceCategory::Style,
            RefCategoryArg::Coloring => ReferenceCategory::Coloring,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comicgen=warn,comicgen_core=warn".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let store = PromptStore::new(config.storage_dir());
    tracing::debug!(storage_dir = %store.dir().display(), "using prompt store");

    match cli.command {
        Commands::Generate {
            record,
            save,
            approve,
        } => commands::generate::run(record.as_deref(), save, approve, &store, &config),
        Commands::Example => commands::generate::example(),
        Commands::Prompts { command } => match command {
            PromptCommands::List => commands::prompts::list(&store, &config),
            PromptCommands::Show { id } => commands::prompts::show(&store, &id),
            PromptCommands::Delete { id } => commands::prompts::delete(&store, &config, &id),
        },
        Commands::Refs { category } => {
            commands::refs::run(category.map(ReferenceCategory::from), &config);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
