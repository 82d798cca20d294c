//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use played_games_core::CategoryKind;
use played_games_lib::settings::ParseSettings;

#[derive(Parser)]
#[command(name = "played-games")]
#[command(about = "Browse a plain-text list of played and watched games", long_about = None)]
pub(crate) struct Cli {
    /// Games list file or URL (`-` for stdin; defaults to the saved source)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Switches that can also be saved as defaults.
///
/// Each switch comes in a pair; the last one given wins and an absent pair
/// keeps the saved value.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SwitchArgs {
    /// Expand series notation such as "Name 1-3" into separate games
    #[arg(long, overrides_with = "no_expand")]
    pub expand: bool,

    /// Keep series notation such as "Name 1-3" as a single game
    #[arg(long, overrides_with = "expand")]
    pub no_expand: bool,

    /// Sort games by name within each category
    #[arg(long, overrides_with = "no_sort")]
    pub sort: bool,

    /// Keep games in file order
    #[arg(long, overrides_with = "sort")]
    pub no_sort: bool,

    /// Sort in ascending order (implies --sort)
    #[arg(long, overrides_with = "descending")]
    pub ascending: bool,

    /// Sort in descending order (implies --sort)
    #[arg(long, overrides_with = "ascending")]
    pub descending: bool,

    /// Categories to show (e.g., finished,not-finished,watched,not-watched,other)
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Option<Vec<CategoryKind>>,

    /// Match the filter case-insensitively
    #[arg(short, long, overrides_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match the filter case-sensitively
    #[arg(long, overrides_with = "ignore_case")]
    pub case_sensitive: bool,
}

impl SwitchArgs {
    /// Override the saved switches with the ones given on the command line.
    pub(crate) fn apply(&self, parse: &mut ParseSettings) {
        if let Some(expand) = pick(self.expand, self.no_expand) {
            parse.expand_sequences = expand;
        }
        if let Some(sort) = pick(self.sort, self.no_sort) {
            parse.sort = sort;
        }
        if let Some(descending) = pick(self.descending, self.ascending) {
            parse.sort = true;
            parse.sort_descending = descending;
        }
        if let Some(ignore_case) = pick(self.ignore_case, self.case_sensitive) {
            parse.filter_ignore_case = ignore_case;
        }
        if let Some(categories) = &self.categories {
            parse.categories = categories.clone();
        }
    }
}

/// The value of an on/off flag pair, or `None` when neither was given.
fn pick(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Arguments shared by the commands that parse the games list.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ParseArgs {
    /// Wildcard filter on game names (e.g., "Half*", "*Souls?")
    #[arg(short, long, default_value = "")]
    pub filter: String,

    #[command(flatten)]
    pub switches: SwitchArgs,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show games grouped by platform and category
    Show {
        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Export the parsed games as JSON
    Export {
        #[command(flatten)]
        parse: ParseArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show game and platform totals
    Stats {
        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the saved settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the given source and switches as defaults
    Save {
        #[command(flatten)]
        switches: SwitchArgs,
    },

    /// Delete the settings file
    Reset,
}
