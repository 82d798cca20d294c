use played_games_parser::sequence::{MAX_RANGE_LEN, SequenceExpander, expand_game_name};
use played_games_parser::SequenceError;

#[test]
fn comma_list_of_numbers() {
    assert_eq!(
        expand_game_name("Resident Evil 4, 5, 6"),
        vec!["Resident Evil 4", "Resident Evil 5", "Resident Evil 6"]
    );
}

#[test]
fn comma_list_without_spaces() {
    assert_eq!(
        expand_game_name("Sonic 2,3"),
        vec!["Sonic 2", "Sonic 3"]
    );
}

#[test]
fn range_drops_number_of_first_part() {
    assert_eq!(
        expand_game_name("Resident Evil 1-3"),
        vec!["Resident Evil", "Resident Evil 2", "Resident Evil 3"]
    );
}

#[test]
fn range_with_spaces_around_dash() {
    assert_eq!(
        expand_game_name("Gothic 2 - 3"),
        vec!["Gothic 2", "Gothic 3"]
    );
}

#[test]
fn list_starting_at_one() {
    assert_eq!(
        expand_game_name("Max Payne 1, 2"),
        vec!["Max Payne", "Max Payne 2"]
    );
}

#[test]
fn roman_numeral_list() {
    assert_eq!(
        expand_game_name("Heroes of Might and Magic III, IV"),
        vec!["Heroes of Might and Magic III", "Heroes of Might and Magic IV"]
    );
}

#[test]
fn roman_numerals_are_case_insensitive_and_kept_literal() {
    assert_eq!(
        expand_game_name("Final Fantasy vii, x"),
        vec!["Final Fantasy vii", "Final Fantasy x"]
    );
}

#[test]
fn roman_one_is_not_treated_as_first_part() {
    assert_eq!(
        expand_game_name("Baldur's Gate I, II"),
        vec!["Baldur's Gate I", "Baldur's Gate II"]
    );
}

#[test]
fn single_roman_numeral_is_unchanged() {
    assert_eq!(expand_game_name("Final Fantasy VII"), vec!["Final Fantasy VII"]);
}

#[test]
fn single_number_is_unchanged() {
    assert_eq!(expand_game_name("Dota 2"), vec!["Dota 2"]);
    assert_eq!(expand_game_name("Half-Life"), vec!["Half-Life"]);
}

#[test]
fn first_sequence_wins_and_rest_is_dropped() {
    assert_eq!(
        expand_game_name("Trollface Quest 1-7-8"),
        vec![
            "Trollface Quest",
            "Trollface Quest 2",
            "Trollface Quest 3",
            "Trollface Quest 4",
            "Trollface Quest 5",
            "Trollface Quest 6",
            "Trollface Quest 7",
        ]
    );
    assert_eq!(
        expand_game_name("Worms 2, 3 Armageddon"),
        vec!["Worms 2", "Worms 3"]
    );
}

#[test]
fn descending_range_is_reported_and_expands_to_nothing() {
    let expander = SequenceExpander::new();
    let err = expander.try_expand("Name 7-3").unwrap_err();
    assert_eq!(err, SequenceError::DescendingRange { lo: 7, hi: 3 });
    assert!(expander.expand("Name 7-3").is_empty());
}

#[test]
fn huge_range_keeps_original_name() {
    let expander = SequenceExpander::new();
    let name = format!("Lemmings 1-{}", MAX_RANGE_LEN + 5);
    assert!(matches!(
        expander.try_expand(&name),
        Err(SequenceError::RangeTooLong { .. })
    ));
    assert_eq!(expander.expand(&name), vec![name.clone()]);
}

#[test]
fn overflowing_bound_keeps_original_name() {
    let expander = SequenceExpander::new();
    let name = "Game 1-99999999999999999999";
    assert!(matches!(
        expander.try_expand(name),
        Err(SequenceError::InvalidNumber(_))
    ));
    assert_eq!(expander.expand(name), vec![name]);
}

#[test]
fn non_ascii_base_name() {
    assert_eq!(
        expand_game_name("Сталкер 1-2"),
        vec!["Сталкер", "Сталкер 2"]
    );
}

#[test]
fn bare_number_list_keeps_separator_space() {
    assert_eq!(expand_game_name("1942, 1943"), vec![" 1942", " 1943"]);
}

#[test]
fn roman_letters_inside_words_form_a_list() {
    assert_eq!(
        expand_game_name("Splinter Cell, Chaos Theory"),
        vec!["Splinter Ce ll", "Splinter Ce C"]
    );
}
