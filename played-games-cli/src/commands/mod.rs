pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod show;
pub(crate) mod stats;

use played_games_lib::{ParseEngine, ParseResult, Settings, load_text};

use crate::cli_types::ParseArgs;
use crate::error::CliError;

/// Saved settings with the command-line overrides applied.
pub(crate) fn resolve_settings(source: Option<String>, args: &ParseArgs) -> Settings {
    let mut settings = Settings::load();
    if let Some(source) = source {
        settings.source.location = source;
    }
    args.switches.apply(&mut settings.parse);
    settings
}

/// Load the games text and parse it.
pub(crate) fn load_result(source: Option<String>, args: &ParseArgs) -> Result<ParseResult, CliError> {
    let settings = resolve_settings(source, args);
    let options = settings.parse_options(&args.filter);
    log::debug!("Loading games from {}", settings.source.location);

    let text = load_text(&settings.source.location)?;
    let mut engine = ParseEngine::new();
    engine.parse(&text, &options)?;
    let result = engine.into_result();

    if !result.diagnostics.is_empty() {
        log::debug!("{} diagnostic(s) while parsing", result.diagnostics.len());
    }
    Ok(result)
}
