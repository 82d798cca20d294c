//! played-games CLI
//!
//! Command-line interface for browsing a plain-text played-games list.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let source = cli.source;
    match cli.command {
        Commands::Show { parse } => commands::show::run_show(source, &parse),
        Commands::Export { parse, output } => {
            commands::export::run_export(source, &parse, output.as_deref())
        }
        Commands::Stats { parse } => commands::stats::run_stats(source, &parse),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Save { switches } => commands::config::run_config_save(source, &switches),
            ConfigAction::Reset => commands::config::run_config_reset(),
        },
    }
}
