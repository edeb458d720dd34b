//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line surface: data sources, output format, logging, and one
// subcommand per dashboard page.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use dataset::Selector;
use log::LevelFilter;
use persistence::{DataSources, DEFAULT_EVENTS_FILE, DEFAULT_REGIONS_FILE};

/// Olympics analytics over the Summer games athlete event history
#[derive(Parser, Debug, Clone)]
#[command(name = "olympics")]
#[command(about = "Medal tallies, trends and athlete statistics for the Summer Olympics", long_about = None)]
pub struct Cli {
    /// Athlete event CSV
    #[arg(long, global = true, env = "OLYMPICS_EVENTS_CSV", default_value = DEFAULT_EVENTS_FILE)]
    pub events: PathBuf,

    /// NOC region lookup CSV
    #[arg(long, global = true, env = "OLYMPICS_REGIONS_CSV", default_value = DEFAULT_REGIONS_FILE)]
    pub regions: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Base log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "OLYMPICS_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    /// Mirror log lines into this file
    #[arg(long, global = true, env = "OLYMPICS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Raise the log level one step per occurrence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub view: ViewCommand,
}

impl Cli {
    pub fn sources(&self) -> DataSources {
        DataSources::new(self.events.clone(), self.regions.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Medal tally by country, or one country's record over the years
    Tally {
        /// A games year, or "Overall"
        #[arg(long, default_value = "Overall")]
        year: Selector<i32>,

        /// A country, or "Overall"
        #[arg(long, default_value = "Overall")]
        country: Selector<String>,
    },

    /// Headline numbers, participation trends, events heatmap and top athletes
    Overview {
        /// Sport for the top athlete table, or "Overall"
        #[arg(long, default_value = "Overall")]
        sport: Selector<String>,
    },

    /// Medal history, sport heatmap and top athletes of one country
    Country {
        /// Country (region) name, e.g. "India"
        region: String,
    },

    /// Age distributions, weight vs height and male/female participation
    Athletes {
        /// Sport for the weight vs height table, or "Overall"
        #[arg(long, default_value = "Overall")]
        sport: Selector<String>,
    },

    /// List the values accepted by the year, country and sport filters
    Options,
}
