//! Display helpers for presenting a parse result.
//!
//! Human-readable titles live here rather than in the model so every front
//! end shares the same wording and ordering.

use played_games_core::{Category, CategoryKind, Platform, ResultView};

pub const APP_TITLE: &str = "Played Games";

/// Heading of the bucket with unrecognized lines.
pub const OTHER_TITLE: &str = "Unclassified games";

/// Order in which a platform's categories are shown.
pub const DISPLAY_ORDER: [CategoryKind; 4] = [
    CategoryKind::FinishedGame,
    CategoryKind::NotFinishedGame,
    CategoryKind::FinishedWatched,
    CategoryKind::NotFinishedWatched,
];

pub fn category_title(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::FinishedGame => "Finished",
        CategoryKind::NotFinishedGame => "Not finished",
        CategoryKind::FinishedWatched => "Watched",
        CategoryKind::NotFinishedWatched => "Not finished watching",
        CategoryKind::Other => "Other",
    }
}

/// `"PC (12):"`
pub fn platform_label(platform: &Platform) -> String {
    format!("{} ({}):", platform.name(), platform.count_games())
}

/// `"Finished (7):"`
pub fn category_label(category: &Category) -> String {
    format!("{} ({}):", category_title(category.kind()), category.len())
}

/// `"Unclassified games (3):"`
pub fn other_label(view: &ResultView<'_>) -> String {
    format!("{OTHER_TITLE} ({}):", view.count_other_games())
}

/// `"Played Games. Platforms: 4. Games: 120"`
pub fn summary_line(view: &ResultView<'_>) -> String {
    format!(
        "{APP_TITLE}. Platforms: {}. Games: {}",
        view.count_platforms(),
        view.count_games()
    )
}

/// A platform's categories in [`DISPLAY_ORDER`], skipping absent ones.
pub fn ordered_categories(platform: &Platform) -> impl Iterator<Item = &Category> {
    DISPLAY_ORDER
        .iter()
        .filter_map(move |&kind| platform.get(kind))
}
