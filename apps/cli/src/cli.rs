//! Command line arguments

use clap::{Parser, Subcommand, ValueEnum};
use jokes::JokeType;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jokebox")]
#[command(about = "Fetch jokes and keep a collection of favourites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the saved collection
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a joke from the joke service
    Fetch {
        #[arg(long = "type", value_enum, default_value_t = Feed::Random)]
        joke_type: Feed,

        /// Type out the punchline
        #[arg(long)]
        reveal: bool,

        /// Add the joke to the collection
        #[arg(long)]
        save: bool,
    },

    /// Browse the saved collection
    List {
        /// Case-insensitive text filter on setup and punchline
        #[arg(long, default_value = "")]
        search: String,

        /// Only jokes with at least this many stars
        #[arg(long, default_value_t = 0)]
        min_rating: u8,

        /// newest, rating or alphabetical
        #[arg(long, default_value = "newest")]
        sort: String,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Rate a saved joke from 0 (unrated) to 5 stars
    Rate { id: String, stars: u8 },

    /// Remove a saved joke
    Remove { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Feed {
    Random,
    Programming,
}

impl From<Feed> for JokeType {
    fn from(feed: Feed) -> Self {
        match feed {
            Feed::Random => JokeType::Random,
            Feed::Programming => JokeType::Programming,
        }
    }
}
