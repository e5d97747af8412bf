//! Snippets CLI - store and retrieve snippets of text

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use snippets::config::{self, Settings};
use snippets::output::{self, OutputMode};
use snippets::ui::{self, Renderer};
use snippets::{Command, Listing, SnippetStore, Visibility};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "snippets")]
#[command(version)]
#[command(about = "Store and retrieve snippets of text")]
#[command(long_about = r#"
Snippets keeps short named text fragments in a SQLite table.

Example usage:
  snippets put insert "INSERT INTO table VALUES (1, 2)"
  snippets get insert
  snippets search "VALUES"
  snippets put password hunter2 --hide
  snippets catalog --visible-only
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file (defaults to ./snippets.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a snippet, replacing any snippet with the same name
    Put {
        /// Name of the snippet
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        name: String,

        /// Snippet text
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        snippet: String,

        /// Hide the snippet from visible-only listings
        #[arg(long, conflicts_with = "show")]
        hide: bool,

        /// Show the snippet in visible-only listings (the default)
        #[arg(long)]
        show: bool,
    },

    /// Retrieve a snippet by name
    Get {
        /// Name of the snippet
        name: String,
    },

    /// List all snippet names in ascending order
    Catalog {
        /// Skip hidden snippets
        #[arg(long)]
        visible_only: bool,
    },

    /// Find snippets whose text contains a string (case-sensitive)
    Search {
        /// Text to look for
        query: String,

        /// Skip hidden snippets
        #[arg(long)]
        visible_only: bool,
    },

    /// Delete a snippet by name
    Delete {
        /// Name of the snippet
        name: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Put { name, snippet, hide, show } => Command::Put {
                name,
                message: snippet,
                visibility: Visibility::from_flags(hide, show),
            },
            Commands::Get { name } => Command::Get { name },
            Commands::Catalog { visible_only } => Command::Catalog {
                listing: listing(visible_only),
            },
            Commands::Search { query, visible_only } => Command::Search {
                query,
                listing: listing(visible_only),
            },
            Commands::Delete { name } => Command::Delete { name },
        }
    }
}

fn listing(visible_only: bool) -> Listing {
    if visible_only { Listing::VisibleOnly } else { Listing::All }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let stderr_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(stderr_filter))
        .with(file_layer)
        .init();

    Ok(())
}

struct Invocation {
    verbose: bool,
    database: Option<PathBuf>,
    config: Option<PathBuf>,
    output_mode: OutputMode,
}

fn run(invocation: Invocation, command: Command) -> anyhow::Result<()> {
    let file_config = config::load_config(invocation.config.as_deref())?;
    let settings = Settings::resolve(invocation.database, file_config);

    init_logging(invocation.verbose, settings.log_file.as_deref())?;

    let command_name = command.name();
    tracing::debug!("Using database {}", settings.database.display());

    let store = SnippetStore::open(&settings.database, &settings.store)?;
    let outcome = snippets::dispatch(&store, command)?;
    store.close()?;

    if invocation.output_mode.is_human() {
        println!("{}", Renderer::new(ui::theme()).render(&outcome));
    } else {
        println!("{}", output::success_envelope(command_name, &outcome)?);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output_mode = OutputMode::from_json_flag(cli.json);
    let command = Command::from(cli.command);
    let command_name = command.name();
    let invocation = Invocation {
        verbose: cli.verbose,
        database: cli.database,
        config: cli.config,
        output_mode,
    };

    match run(invocation, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{} failed: {:#}", command_name, e);
            if output_mode.is_human() {
                ui::error(&format!("{:#}", e));
            } else {
                match output::error_envelope(command_name, &format!("{:#}", e)) {
                    Ok(envelope) => println!("{}", envelope),
                    Err(_) => ui::error(&format!("{:#}", e)),
                }
            }
            ExitCode::FAILURE
        }
    }
}
