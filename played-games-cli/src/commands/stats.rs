use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use played_games_lib::display;

use crate::cli_types::ParseArgs;
use crate::error::CliError;

pub(crate) fn run_stats(source: Option<String>, args: &ParseArgs) -> Result<(), CliError> {
    let result = super::load_result(source, args)?;
    let view = result.view();

    log::info!(
        "{}",
        display::summary_line(&view).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let totals = view.category_totals();
    for kind in display::DISPLAY_ORDER {
        log::info!(
            "  {:<24} {}",
            format!("{}:", display::category_title(kind)).if_supports_color(Stdout, |t| t.cyan()),
            totals.get(&kind).copied().unwrap_or(0),
        );
    }
    log::info!(
        "  {:<24} {} in {} platform(s)",
        format!("{}:", display::OTHER_TITLE).if_supports_color(Stdout, |t| t.yellow()),
        view.count_other_games(),
        view.count_other_platforms(),
    );

    log::info!("");
    for platform in view.sorted_platforms() {
        log::info!(
            "  {:<24} {}",
            format!("{}:", platform.name()).if_supports_color(Stdout, |t| t.bold()),
            platform.count_games(),
        );
    }

    if !result.diagnostics.is_empty() {
        log::info!("");
        log::info!(
            "{}",
            format!("{} issue(s) while parsing", result.diagnostics.len())
                .if_supports_color(Stdout, |t| t.yellow()),
        );
        for diagnostic in &result.diagnostics {
            log::info!(
                "  {}",
                diagnostic.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    Ok(())
}
