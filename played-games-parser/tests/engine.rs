use played_games_core::{CategoryKind, DiagnosticKind, ParseResult};
use played_games_parser::{ParseEngine, ParseError, ParseOptions, WildcardFilter, parse};

const SAMPLE: &str = "\
PC:
  Portal
- Half-Life
@ Celeste
@-Dota 2
";

const LIBRARY: &str = "\
Notes before any header are ignored
  Ghost Game

PC:
  Resident Evil 1-3
  Portal
  Portal
- Half-Life 2
 -Thief
!!Mystery Game
@ Celeste

PS1:
  Spyro 1-3
@ Silent Hill

Empty Platform:

DS:
??Strange Line
  Picross
";

fn names(result: &ParseResult, platform: &str, kind: CategoryKind) -> Vec<String> {
    result
        .platforms
        .get(platform)
        .and_then(|p| p.get(kind))
        .map(|c| c.iter().map(|g| g.name().to_string()).collect())
        .unwrap_or_default()
}

fn other_names(result: &ParseResult, platform: &str) -> Vec<String> {
    result
        .other
        .get(platform)
        .and_then(|p| p.get(CategoryKind::Other))
        .map(|c| c.iter().map(|g| g.name().to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn classifies_each_marker() {
    let result = parse(SAMPLE, &ParseOptions::default()).unwrap();
    assert_eq!(result.platforms.len(), 1);
    assert_eq!(names(&result, "PC", CategoryKind::FinishedGame), vec!["Portal"]);
    assert_eq!(names(&result, "PC", CategoryKind::NotFinishedGame), vec!["Half-Life"]);
    assert_eq!(names(&result, "PC", CategoryKind::FinishedWatched), vec!["Celeste"]);
    assert_eq!(names(&result, "PC", CategoryKind::NotFinishedWatched), vec!["Dota 2"]);
    assert!(result.other.is_empty());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn lines_before_first_header_are_discarded() {
    let result = parse(LIBRARY, &ParseOptions::default()).unwrap();
    assert!(result.view().games().iter().all(|g| g.name != "Ghost Game"));
    assert!(result.other.iter().all(|p| p.games().all(|g| !g.name().contains("Notes"))));
}

#[test]
fn expands_sequences_by_default() {
    let result = parse(LIBRARY, &ParseOptions::default()).unwrap();
    assert_eq!(
        names(&result, "PC", CategoryKind::FinishedGame),
        vec!["Resident Evil", "Resident Evil 2", "Resident Evil 3", "Portal"]
    );
    assert_eq!(
        names(&result, "PS1", CategoryKind::FinishedGame),
        vec!["Spyro", "Spyro 2", "Spyro 3"]
    );
}

#[test]
fn expansion_can_be_disabled() {
    let options = ParseOptions::new().expand_sequences(false);
    let result = parse(LIBRARY, &options).unwrap();
    assert_eq!(
        names(&result, "PC", CategoryKind::FinishedGame),
        vec!["Resident Evil 1-3", "Portal"]
    );
}

#[test]
fn duplicates_are_skipped_and_reported() {
    let result = parse(LIBRARY, &ParseOptions::default()).unwrap();
    let portal = names(&result, "PC", CategoryKind::FinishedGame)
        .into_iter()
        .filter(|n| n == "Portal")
        .count();
    assert_eq!(portal, 1);

    let duplicate = result
        .diagnostics
        .iter()
        .find(|d| matches!(d.kind, DiagnosticKind::DuplicateGame { .. }))
        .expect("duplicate should be reported");
    assert_eq!(duplicate.line, 7);
    assert_eq!(
        duplicate.kind,
        DiagnosticKind::DuplicateGame {
            platform: "PC".into(),
            name: "Portal".into(),
            kind: CategoryKind::FinishedGame,
        }
    );
}

#[test]
fn no_category_holds_duplicate_names() {
    let text = "PC:\n  A\n  A\n  A 1, 1\n- A\n- A\n";
    let result = parse(text, &ParseOptions::default()).unwrap();
    for platform in &result.platforms {
        for category in platform.categories() {
            let mut seen = std::collections::HashSet::new();
            for game in category {
                assert!(seen.insert(game.name()), "duplicate {}", game.name());
            }
        }
    }
    assert_eq!(names(&result, "PC", CategoryKind::FinishedGame), vec!["A"]);
    assert_eq!(names(&result, "PC", CategoryKind::NotFinishedGame), vec!["A"]);
}

#[test]
fn unknown_marker_goes_to_other() {
    let text = "PC:\n!!Mystery Game\n";
    let result = parse(text, &ParseOptions::default()).unwrap();
    // The platform only had an unrecognized line, so it is pruned from the main collection
    assert!(result.platforms.get("PC").is_none());
    assert_eq!(other_names(&result, "PC"), vec!["!!Mystery Game"]);
    assert!(matches!(
        &result.diagnostics[0].kind,
        DiagnosticKind::UnknownMarker { marker, platform, .. } if marker == "!!" && platform == "PC"
    ));
}

#[test]
fn unknown_marker_keeps_standard_categories_clean() {
    let result = parse(LIBRARY, &ParseOptions::default()).unwrap();
    let pc = result.platforms.get("PC").unwrap();
    assert!(pc.games().all(|g| !g.name().contains("Mystery")));
    assert_eq!(other_names(&result, "PC"), vec!["!!Mystery Game"]);
    assert_eq!(other_names(&result, "DS"), vec!["??Strange Line"]);
    assert_eq!(result.other.names().collect::<Vec<_>>(), vec!["PC", "DS"]);
}

#[test]
fn unknown_marker_dropped_when_other_not_allowed() {
    let options = ParseOptions::new().categories([
        CategoryKind::FinishedGame,
        CategoryKind::NotFinishedGame,
    ]);
    let result = parse(LIBRARY, &options).unwrap();
    assert!(result.other.is_empty());
    assert!(names(&result, "PC", CategoryKind::FinishedWatched).is_empty());
    assert!(result.platforms.get("PC").unwrap().get(CategoryKind::FinishedWatched).is_none());
    // PS1 keeps its finished games, DS keeps Picross
    assert_eq!(result.platforms.names().collect::<Vec<_>>(), vec!["PC", "PS1", "DS"]);
}

#[test]
fn other_only_keeps_just_the_bucket() {
    let options = ParseOptions::new().categories([CategoryKind::Other]);
    let result = parse(LIBRARY, &options).unwrap();
    assert!(result.platforms.is_empty());
    assert_eq!(result.other.len(), 2);
}

#[test]
fn empty_platforms_are_pruned() {
    let result = parse(LIBRARY, &ParseOptions::default()).unwrap();
    assert!(result.platforms.get("Empty Platform").is_none());
    assert!(result.other.get("Empty Platform").is_none());
    assert!(result.platforms.iter().all(|p| p.count_games() > 0));

    let result = parse("Header Only:\n", &ParseOptions::default()).unwrap();
    assert!(result.platforms.is_empty());
}

#[test]
fn repeated_header_reopens_platform() {
    let text = "PC:\n  Portal\nPS1:\n  Spyro\nPC:\n  Thief\n";
    let result = parse(text, &ParseOptions::default()).unwrap();
    assert_eq!(result.platforms.names().collect::<Vec<_>>(), vec!["PC", "PS1"]);
    assert_eq!(
        names(&result, "PC", CategoryKind::FinishedGame),
        vec!["Portal", "Thief"]
    );
}

#[test]
fn filter_is_a_prefix_search() {
    let options = ParseOptions::new().filter("Portal");
    let result = parse(LIBRARY, &options).unwrap();
    assert_eq!(result.platforms.names().collect::<Vec<_>>(), vec!["PC"]);
    assert_eq!(names(&result, "PC", CategoryKind::FinishedGame), vec!["Portal"]);
    assert!(result.other.is_empty());
}

#[test]
fn every_returned_name_matches_the_filter() {
    for pattern in ["", "S", "*e*", "Resident Evil ?", "[PS]*", "Half*"] {
        let result = parse(LIBRARY, &ParseOptions::new().filter(pattern)).unwrap();
        let filter = WildcardFilter::new(pattern, false).unwrap();
        for platform in &result.platforms {
            for game in platform.games() {
                assert!(
                    filter.matches(game.name()),
                    "{:?} does not match {:?}",
                    game.name(),
                    pattern
                );
            }
        }
    }
}

#[test]
fn filter_applies_to_expanded_names() {
    let options = ParseOptions::new().filter("Resident Evil 2");
    let result = parse(LIBRARY, &options).unwrap();
    assert_eq!(
        names(&result, "PC", CategoryKind::FinishedGame),
        vec!["Resident Evil 2"]
    );
}

#[test]
fn filter_can_ignore_case() {
    let options = ParseOptions::new().filter("portal").filter_ignore_case(true);
    let result = parse(LIBRARY, &options).unwrap();
    assert_eq!(names(&result, "PC", CategoryKind::FinishedGame), vec!["Portal"]);
}

#[test]
fn sorting_is_monotonic() {
    for descending in [false, true] {
        let options = ParseOptions::new().sort(true).sort_descending(descending);
        let result = parse(LIBRARY, &options).unwrap();
        for platform in result.platforms.iter().chain(result.other.iter()) {
            for category in platform.categories() {
                let names: Vec<&str> = category.iter().map(|g| g.name()).collect();
                let mut expected = names.clone();
                expected.sort();
                if descending {
                    expected.reverse();
                }
                assert_eq!(names, expected);
            }
        }
    }
}

#[test]
fn unsorted_keeps_insertion_order() {
    let result = parse("PC:\n  Zork\n  Abzu\n  Myst\n", &ParseOptions::default()).unwrap();
    assert_eq!(
        names(&result, "PC", CategoryKind::FinishedGame),
        vec!["Zork", "Abzu", "Myst"]
    );
}

#[test]
fn descending_range_is_reported_not_fatal() {
    let text = "PC:\n  Name 7-3\n  Portal\n";
    let result = parse(text, &ParseOptions::default()).unwrap();
    assert_eq!(names(&result, "PC", CategoryKind::FinishedGame), vec!["Portal"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].line, 2);
    assert!(matches!(
        result.diagnostics[0].kind,
        DiagnosticKind::MalformedSequence { .. }
    ));
}

#[test]
fn windows_line_endings_and_trailing_spaces() {
    let text = "PC:  \r\n  Portal   \r\n- Half-Life\r\n";
    let result = parse(text, &ParseOptions::default()).unwrap();
    assert_eq!(names(&result, "PC", CategoryKind::FinishedGame), vec!["Portal"]);
    assert_eq!(names(&result, "PC", CategoryKind::NotFinishedGame), vec!["Half-Life"]);
}

#[test]
fn parsing_twice_is_idempotent() {
    let options = ParseOptions::new().sort(true);
    let mut engine = ParseEngine::new();
    let first = engine.parse(LIBRARY, &options).unwrap().clone();
    let second = engine.parse(LIBRARY, &options).unwrap();
    assert_eq!(&first, second);
}

#[test]
fn engine_replaces_previous_result() {
    let mut engine = ParseEngine::new();
    engine.parse(LIBRARY, &ParseOptions::default()).unwrap();
    engine.parse(SAMPLE, &ParseOptions::default()).unwrap();
    assert_eq!(engine.result().platforms.names().collect::<Vec<_>>(), vec!["PC"]);
    assert!(engine.result().other.is_empty());
    assert!(engine.result().diagnostics.is_empty());
}

#[test]
fn view_totals() {
    let result = parse(LIBRARY, &ParseOptions::default()).unwrap();
    let view = result.view();
    // PC: 4 finished + 2 not finished + 1 watched, PS1: 3 + 1, DS: 1, Other: 2
    assert_eq!(view.count_games(), 14);
    assert_eq!(view.count_platforms(), 3);
    assert_eq!(view.count_other_games(), 2);
    let order: Vec<&str> = view.sorted_platforms().iter().map(|p| p.name()).collect();
    assert_eq!(order, vec!["PC", "PS1", "DS"]);
}

#[test]
fn snapshot_shape() {
    let result = parse(SAMPLE, &ParseOptions::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "platforms": {
                "PC": {
                    "FINISHED_GAME": ["Portal"],
                    "NOT_FINISHED_GAME": ["Half-Life"],
                    "FINISHED_WATCHED": ["Celeste"],
                    "NOT_FINISHED_WATCHED": ["Dota 2"]
                }
            },
            "other": {}
        })
    );
}

#[test]
fn text_never_fails_but_filter_can() {
    let garbage = "\u{0}\n::\n-\n@\n \n:::::\nА:\n!\n";
    assert!(parse(garbage, &ParseOptions::default()).is_ok());

    let huge = "a".repeat(2_000_000);
    let err = parse(SAMPLE, &ParseOptions::new().filter(huge)).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFilter { .. }));
}
