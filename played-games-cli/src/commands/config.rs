use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use played_games_lib::{Settings, settings_path};

use crate::cli_types::SwitchArgs;
use crate::error::CliError;

/// Show the settings file and its contents.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "Played Games Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match Settings::load_string(&path) {
        Some(contents) => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
            log::info!("");
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        None if path.exists() => {
            log::warn!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(unreadable)".if_supports_color(Stdout, |t| t.red()),
            );
        }
        None => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
            );
            let defaults = Settings::default().to_toml_string()?;
            log::info!("");
            for line in defaults.lines() {
                log::info!("  {line}");
            }
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Persist the given source and switches on top of the saved settings.
pub(crate) fn run_config_save(source: Option<String>, switches: &SwitchArgs) -> Result<(), CliError> {
    let path = settings_path();
    let mut settings = Settings::try_load_from(&path)?;
    if let Some(source) = source {
        settings.source.location = source;
    }
    switches.apply(&mut settings.parse);
    settings.save()?;

    log::info!(
        "{} Settings saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Delete the settings file.
pub(crate) fn run_config_reset() -> Result<(), CliError> {
    let path = settings_path();
    if Settings::reset(&path)? {
        log::info!(
            "{} Removed {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    } else {
        log::info!(
            "{}",
            "No settings file to remove".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
