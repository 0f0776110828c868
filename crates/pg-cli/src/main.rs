//! CLI frontend for the plebgen character generator.

mod commands;
mod render;
mod roster;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "plebgen",
    about = "plebgen - tabletop NPC, party and player character generator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// RNG seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file overriding the built-in tables
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// JSON oracle deck replacing the built-in cards
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// How generated records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a party of non-player characters
    Party {
        /// Force the party size (1 to 12)
        #[arg(short, long)]
        size: Option<usize>,

        /// Force how many members take cultural names
        #[arg(short, long)]
        cultural: Option<usize>,

        /// Force the culture shared by cultural members
        #[arg(long)]
        culture: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Generate one non-player character with two oracle draws
    Individual {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Generate one player character with two oracle draws
    Player {
        /// Make the character human
        #[arg(long)]
        force_human: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Draw oracle cards
    Draw {
        /// Number of cards to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Roll a dice expression such as 3d6 or 4d6k3
    Roll {
        /// Dice expression
        expr: String,

        /// Number of times to roll
        #[arg(short = 'n', long, default_value = "1")]
        times: usize,
    },

    /// Print the active tables
    Tables {
        /// Print the full tables as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive generation session
    Session,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::load(cli.tables.as_deref(), cli.deck.as_deref(), cli.seed);

    let result = ctx.and_then(|mut ctx| match cli.command {
        Commands::Party {
            size,
            cultural,
            culture,
            format,
        } => commands::party::run(&mut ctx, size, cultural, culture, format),
        Commands::Individual { format } => commands::individual::run(&mut ctx, format),
        Commands::Player {
            force_human,
            format,
        } => commands::player::run(&mut ctx, force_human, format),
        Commands::Draw { count, format } => commands::draw::run(&mut ctx, count, format),
        Commands::Roll { expr, times } => commands::roll::run(&mut ctx, &expr, times),
        Commands::Tables { json } => commands::tables::run(&ctx, json),
        Commands::Session => commands::session::run(&mut ctx),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
