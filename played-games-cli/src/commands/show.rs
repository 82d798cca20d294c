use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use played_games_lib::display;

use crate::cli_types::ParseArgs;
use crate::error::CliError;

/// Print games grouped by platform, largest platforms first.
pub(crate) fn run_show(source: Option<String>, args: &ParseArgs) -> Result<(), CliError> {
    let result = super::load_result(source, args)?;
    let view = result.view();

    log::info!(
        "{}",
        display::summary_line(&view).if_supports_color(Stdout, |t| t.bold()),
    );

    if view.count_games() == 0 {
        log::info!("");
        log::info!(
            "{}",
            "No games match.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for platform in view.sorted_platforms() {
        log::info!("");
        log::info!(
            "{}",
            display::platform_label(platform).if_supports_color(Stdout, |t| t.bold()),
        );
        for category in display::ordered_categories(platform) {
            log::info!(
                "  {}",
                display::category_label(category).if_supports_color(Stdout, |t| t.cyan()),
            );
            for game in category {
                log::info!("    {}", game.name());
            }
        }
    }

    if !result.other.is_empty() {
        log::info!("");
        log::info!(
            "{}",
            display::other_label(&view).if_supports_color(Stdout, |t| t.yellow()),
        );
        for platform in &result.other {
            log::info!(
                "  {}",
                display::platform_label(platform).if_supports_color(Stdout, |t| t.bold()),
            );
            for category in platform.categories().filter(|c| !c.kind().is_standard()) {
                for game in category {
                    log::info!(
                        "    {}",
                        game.name().if_supports_color(Stdout, |t| t.dimmed()),
                    );
                }
            }
        }
    }

    Ok(())
}
