use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "collaborative-filtering book recommender")]
pub struct Cli {
    /// Directory holding BX-Book-Ratings.csv and BX-Books.csv (defaults to $BX_DATA_PATH, then ".")
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Recommend books for one consumer
    Recommend {
        /// Consumer (User-ID) to recommend for
        #[arg(short, long)]
        user: String,
        /// Similarity metric: MINKOWSKI, PEARSON or COSINE
        #[arg(short, long)]
        metric: Option<String>,
        /// Power of the Minkowski distance
        #[arg(short = 'r', long)]
        power: Option<f64>,
        /// Recommendation strategy
        #[arg(short, long, value_enum, default_value_t = Strategy::Weighted)]
        strategy: Strategy,
        /// Neighbors aggregated by the weighted strategy
        #[arg(short = 'k', long)]
        neighbors: Option<usize>,
        /// Maximum number of weighted recommendations
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the consumers closest to one consumer
    Neighbors {
        /// Consumer (User-ID) to compare against
        #[arg(short, long)]
        user: String,
        /// Similarity metric: MINKOWSKI, PEARSON or COSINE
        #[arg(short, long)]
        metric: Option<String>,
        /// Power of the Minkowski distance
        #[arg(short = 'r', long)]
        power: Option<f64>,
        /// How many neighbors to show
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the consumers with the most ratings
    Users {
        /// Only list consumers with at least this many ratings
        #[arg(long, default_value_t = 1)]
        min_ratings: usize,
        /// How many consumers to show
        #[arg(short, long, default_value_t = 20)]
        count: usize,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Everything the single nearest neighbor rated
    Single,
    /// Weighted aggregation over the k nearest neighbors
    Weighted,
}
