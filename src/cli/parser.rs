use crate::export::ExportFormat;
use crate::models::{City, DayFilter, MonthFilter, Selection};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rBikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Without a command the interactive explorer starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// City / month / day given as flags instead of interactive answers.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// City: chicago, "new york city" or washington
    #[arg(long, value_parser = parse_city)]
    pub city: City,

    /// Month: all, january … june
    #[arg(long, default_value = "all", value_parser = parse_month)]
    pub month: MonthFilter,

    /// Day of week: all, monday … sunday
    #[arg(long, default_value = "all", value_parser = parse_day)]
    pub day: DayFilter,
}

impl SelectionArgs {
    pub fn selection(&self) -> Selection {
        Selection::new(self.city, self.month, self.day)
    }
}

fn parse_city(s: &str) -> Result<City, String> {
    City::from_input(s).ok_or_else(|| format!("unknown city '{s}'"))
}

fn parse_month(s: &str) -> Result<MonthFilter, String> {
    MonthFilter::from_input(s)
        .ok_or_else(|| format!("expected one of: {}", MonthFilter::choices().join(", ")))
}

fn parse_day(s: &str) -> Result<DayFilter, String> {
    DayFilter::from_input(s)
        .ok_or_else(|| format!("expected one of: {}", DayFilter::choices().join(", ")))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive explorer (default)
    Explore,

    /// Print the statistics for one selection, without prompts
    Stats {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Write the filtered trips to a CSV or JSON file
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configured datasets and whether they are present
    Info,

    /// Write the default configuration file
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
