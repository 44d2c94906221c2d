//! CLI frontend for the Beutezug loot companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bz",
    about = "Beutezug — loot companion for tabletop dungeon crawls",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive camp session
    Play {
        /// Loot table file (JSON record list or cell grid)
        #[arg(short, long)]
        loot: PathBuf,

        /// Roster file (created on first save)
        #[arg(short, long, default_value = "heroes.json")]
        store: PathBuf,

        /// Fixed RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the monsters in a loot table file
    Monsters {
        /// Loot table file (JSON record list or cell grid)
        #[arg(short, long)]
        loot: PathBuf,
    },

    /// List the heroes in a roster file
    Heroes {
        /// Roster file
        #[arg(short, long, default_value = "heroes.json")]
        store: PathBuf,
    },

    /// Resolve a single defeat for a hero
    Defeat {
        /// Monster name (case-insensitive)
        monster: String,

        /// Hero receiving the rewards
        #[arg(long)]
        hero: String,

        /// Loot table file (JSON record list or cell grid)
        #[arg(short, long)]
        loot: PathBuf,

        /// Roster file
        #[arg(short, long, default_value = "heroes.json")]
        store: PathBuf,

        /// Fixed RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { loot, store, seed } => commands::play::run(&loot, &store, seed),
        Commands::Monsters { loot } => commands::monsters::run(&loot),
        Commands::Heroes { store } => commands::heroes::run(&store),
        Commands::Defeat {
            monster,
            hero,
            loot,
            store,
            seed,
        } => commands::defeat::run(&monster, &hero, &loot, &store, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
