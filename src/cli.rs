use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "poketrack")]
#[command(version, about = "Browse the trading card reference catalog")]
pub struct Cli {
    /// Reference catalog file (default: poke.csv next to the executable)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all names in catalog order
    Names,

    /// List all categories in catalog order
    Categories,

    /// Show the category and moves of one name
    Show {
        /// Name to look up (exact match)
        name: String,
    },

    /// List the card rarities
    Rarities,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
