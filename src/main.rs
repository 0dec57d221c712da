mod cli;
mod codec;
mod config;
mod date;
mod display;
mod error;
mod filter;
mod models;
mod renderer;
mod store;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::list::FilterArgs;
use crate::models::EntryDraft;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Keep a reading journal of the books you start and finish", long_about = None)]
#[command(
    after_help = "Examples:\n  journal new --name \"Hobbit\" --author \"J.R.R. Tolkien\" --genre fantasy --start 2022-01-01 --score 4\n  journal list --genre fantasy"
)]
struct Cli {
    /// Path to config file (defaults to ./journal.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new journal entry
    New {
        #[command(flatten)]
        entry: NewArgs,

        /// Journal file to write to (overrides the config)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List existing journal entries
    List {
        #[command(flatten)]
        filter: ListFilter,

        /// Journal file to read (overrides the config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print entries and totals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct NewArgs {
    /// (Required) Book name
    #[arg(long)]
    name: Option<String>,

    /// (Required) Author's name
    #[arg(long)]
    author: Option<String>,

    /// (Required) Book genre
    #[arg(long)]
    genre: Option<String>,

    /// (Required) Start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Finish date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Personal score (1-5)
    #[arg(long)]
    score: Option<String>,

    /// Additional note
    #[arg(long)]
    note: Option<String>,
}

#[derive(Args)]
#[group(multiple = false)]
struct ListFilter {
    /// List books of a specific genre
    #[arg(long)]
    genre: Option<String>,

    /// List books currently being read
    #[arg(long)]
    reading: bool,

    /// List completed books
    #[arg(long)]
    completed: bool,

    /// List books with a score equal or higher
    #[arg(long)]
    score: Option<String>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize journal.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

impl From<NewArgs> for EntryDraft {
    fn from(args: NewArgs) -> Self {
        Self {
            book_name: args.name,
            author: args.author,
            genre: args.genre,
            start_date: args.start,
            end_date: args.end,
            score: args.score,
            note: args.note,
        }
    }
}

impl From<ListFilter> for FilterArgs {
    fn from(args: ListFilter) -> Self {
        Self {
            genre: args.genre,
            score: args.score,
            reading: args.reading,
            completed: args.completed,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { entry, file } => cli::new::run(cli.config, file, entry.into()),
        Commands::List { filter, file, json } => {
            cli::list::run(cli.config, file, filter.into(), json)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
