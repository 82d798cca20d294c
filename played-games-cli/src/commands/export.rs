use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::ParseArgs;
use crate::error::CliError;

/// Write the result tree as pretty JSON to `output`, or stdout.
pub(crate) fn run_export(
    source: Option<String>,
    args: &ParseArgs,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let result = super::load_result(source, args)?;
    let json = serde_json::to_string_pretty(&result)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))?;
            log::info!(
                "{} Exported {} games to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                result.view().count_games(),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        None => {
            // Raw stdout so --quiet does not swallow the data
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
