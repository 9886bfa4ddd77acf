//! CLI argument definitions using clap
//!
//! Commands:
//! - reviewhub init --config <path> [--empty]
//! - reviewhub list [filters] [--sort <option>] [--page <n>]
//! - reviewhub stats [filters]
//! - reviewhub show <id>
//! - reviewhub respond <id> --text <text>
//! - reviewhub trend [--period <period>]
//! - reviewhub sync --file <path>

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::query::{parse_timestamp, DateRange, FilterSpec, SortOption, TrendPeriod};
use crate::review::{ParseError, Platform, MAX_RATING, MIN_RATING};

/// reviewhub - filter, sort and analyze customer reviews
#[derive(Parser, Debug)]
#[command(name = "reviewhub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a data directory with the demo reviews
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        /// Start with no reviews instead of the demo set
        #[arg(long)]
        empty: bool,
    },

    /// List one page of filtered, sorted reviews
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// date-desc, date-asc, rating-desc, rating-asc or platform
        #[arg(long, default_value_t = SortOption::DateDesc)]
        sort: SortOption,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Aggregate statistics over filtered reviews
    Stats {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a single review
    Show {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        /// Review id
        id: String,
    },

    /// Attach a response to a review
    Respond {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        /// Review id
        id: String,

        /// Response text
        #[arg(long)]
        text: String,
    },

    /// Average rating per period and the change over the last period
    Trend {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        /// week, month, quarter or year
        #[arg(long, default_value_t = TrendPeriod::Month)]
        period: TrendPeriod,
    },

    /// Merge reviews from a JSON file, keeping stored ones
    Sync {
        /// Path to configuration file
        #[arg(long, default_value = "./reviewhub.json")]
        config: PathBuf,

        /// JSON array of reviews
        #[arg(long)]
        file: PathBuf,
    },
}

/// Filter flags shared by `list` and `stats`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Platform to include; repeat for several
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<Platform>,

    /// Lowest rating to include
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub min_rating: Option<u8>,

    /// Highest rating to include
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub max_rating: Option<u8>,

    /// Earliest date, RFC 3339 or YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date; a bare YYYY-MM-DD covers that whole day
    #[arg(long)]
    pub to: Option<String>,

    /// Case-insensitive text to look for in the review content
    #[arg(long)]
    pub keyword: Option<String>,
}

impl FilterArgs {
    /// Builds the typed filter, parsing dates at the boundary
    pub fn to_filter_spec(&self) -> Result<FilterSpec, ParseError> {
        let mut spec = FilterSpec::new()
            .with_platforms(self.platforms.iter().copied())
            .with_rating_range(
                self.min_rating.unwrap_or(MIN_RATING),
                self.max_rating.unwrap_or(MAX_RATING),
            );

        let from = self
            .from
            .as_deref()
            .map(|s| parse_timestamp(s, false))
            .transpose()?;
        let to = self
            .to
            .as_deref()
            .map(|s| parse_timestamp(s, true))
            .transpose()?;

        match (from, to) {
            (Some(from), Some(to)) => spec = spec.with_date_range(DateRange::between(from, to)),
            (Some(from), None) => spec = spec.with_date_range(DateRange::since(from)),
            (None, Some(to)) => {
                spec = spec.with_date_range(DateRange::between(DateTime::<Utc>::MIN_UTC, to))
            }
            (None, None) => {}
        }

        if let Some(keyword) = &self.keyword {
            spec = spec.with_keyword(keyword.clone());
        }

        Ok(spec)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
