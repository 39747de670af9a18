use crate::{DedupeError, DedupeOptions, Mode, dedupe, process, tokenize};

fn opts(mode: Mode) -> DedupeOptions {
    DedupeOptions::with_mode(mode)
}

#[test]
fn test_item_mode_drops_duplicates_and_empties() {
    let items = tokenize("a\na\nb\n\nc", "\n", true);
    let kept = dedupe(&items, &opts(Mode::Item));
    assert_eq!(kept, vec!["a", "b", "c"]);
    assert_eq!(process("a\na\nb\n\nc", &opts(Mode::Item)).unwrap(), "a\nb\nc\n");
}

#[test]
fn test_key_mode_keeps_first_key_and_keyless() {
    let out = process("a=1\na=2\nb=3\nc", &opts(Mode::Key)).unwrap();
    assert_eq!(out, "a=1\nb=3\nc\n");
}

#[test]
fn test_key_value_mode_dedupes_value_set() {
    assert_eq!(process("a=1,1,2", &opts(Mode::KeyValue)).unwrap(), "a=1,2\n");
}

#[test]
fn test_key_value_mode_is_order_sensitive() {
    let out = process("a=1,2\na=2,1", &opts(Mode::KeyValue)).unwrap();
    assert_eq!(out, "a=1,2\na=2,1\n");
}

#[test]
fn test_key_value_mode_changed_value_survives() {
    assert_eq!(process("a=1\na=2", &opts(Mode::KeyValue)).unwrap(), "a=1\na=2\n");
}

#[test]
fn test_key_value_mode_collapses_exact_repeats() {
    let out = process("a=1,2\nb=x\na = 1, 2, 1\nb=x", &opts(Mode::KeyValue)).unwrap();
    assert_eq!(out, "a=1,2\nb=x\n");
}

#[test]
fn test_trim_toggle_in_item_mode() {
    let trimmed = process(" a \na", &opts(Mode::Item)).unwrap();
    assert_eq!(trimmed, "a\n");

    let untrimmed = DedupeOptions {
        trim_whitespace: false,
        ..opts(Mode::Item)
    };
    assert_eq!(process(" a \na", &untrimmed).unwrap(), " a \na\n");
}

#[test]
fn test_idempotence_across_modes() {
    let input = "a=1,1,2\n b=2 \na=1,2\nc\nc\n\na=3\nb=2\nd=,x,,x\n";
    for mode in [Mode::Item, Mode::Key, Mode::KeyValue] {
        let options = opts(mode);
        let once = process(input, &options).unwrap();
        let twice = process(&once, &options).unwrap();
        assert_eq!(once, twice, "not idempotent in {} mode", mode);
    }
}

#[test]
fn test_custom_separators() {
    let options = DedupeOptions {
        item_separator: ";".to_string(),
        key_separator: ":".to_string(),
        value_separator: "|".to_string(),
        mode: Mode::KeyValue,
        trim_whitespace: true,
    };
    let out = process("x:1|1|2; y:3 ;x:1|2;z", &options).unwrap();
    assert_eq!(out, "x:1|2;y:3;z\n");
}

#[test]
fn test_trailing_newlines_normalized() {
    assert_eq!(process("a\nb\n\n\n", &opts(Mode::Key)).unwrap(), "a\nb\n");
    assert_eq!(process("", &opts(Mode::Item)).unwrap(), "\n");
}

#[test]
fn test_keyless_lines_preserved_in_key_value_mode() {
    let out = process("# header\na=1\n# header\na=1", &opts(Mode::KeyValue)).unwrap();
    assert_eq!(out, "# header\na=1\n# header\n");
}

#[test]
fn test_empty_item_separator_is_rejected() {
    let options = DedupeOptions {
        item_separator: String::new(),
        ..DedupeOptions::default()
    };
    assert!(matches!(
        process("a\na", &options),
        Err(DedupeError::EmptySeparator { .. })
    ));
}

#[test]
fn test_empty_value_separator_splits_per_character() {
    let options = DedupeOptions {
        value_separator: String::new(),
        ..opts(Mode::KeyValue)
    };
    assert_eq!(process("a=1,1", &options).unwrap(), "a=1,\n");
}

#[test]
fn test_item_mode_ignores_empty_key_separator() {
    let options = DedupeOptions {
        key_separator: String::new(),
        ..opts(Mode::Item)
    };
    assert_eq!(process("x\nx\ny", &options).unwrap(), "x\ny\n");
}

#[test]
fn test_empty_key_separator_makes_every_item_share_one_key() {
    let options = DedupeOptions {
        key_separator: String::new(),
        ..opts(Mode::Key)
    };
    assert_eq!(process("a\nb\na", &options).unwrap(), "a\n");
}

#[test]
fn test_output_never_contains_unseen_items() {
    let input = "k=v\nk=w\nplain\nk=v";
    for mode in [Mode::Item, Mode::Key] {
        let out = process(input, &opts(mode)).unwrap();
        for line in out.lines() {
            assert!(input.lines().any(|l| l == line), "{} invented {:?}", mode, line);
        }
    }
}
