#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used, clippy::print_stderr)]

use super::fixture_loader::{FixtureEntry, load_fixtures, run_fixtures};
use http_chars::CharClass;

#[test]
fn test_fixture_cases() {
    let entries = load_fixtures().expect("fixture file should parse");
    let (passed, failures) = run_fixtures(&entries);

    for failure in &failures {
        eprintln!(
            "case #{} ({}) {:?}: expected {:?}, got {:?}",
            failure.case_num, failure.class, failure.input, failure.expected, failure.actual
        );
    }
    assert!(failures.is_empty(), "{} fixture case(s) failed", failures.len());
    assert!(passed > 0);
}

#[test]
fn test_fixtures_cover_every_class() {
    let entries = load_fixtures().unwrap();
    for class in CharClass::ALL {
        let count = entries
            .iter()
            .filter(|entry| {
                matches!(entry, FixtureEntry::Case { class: c, .. } if CharClass::from(*c) == class)
            })
            .count();
        assert!(count >= 4, "too few fixtures for {class}");
    }
}

#[test]
fn test_fixture_invalid_index_matches_validate_position() {
    let entries = load_fixtures().unwrap();
    for entry in &entries {
        if let FixtureEntry::Case {
            class,
            input,
            index: Some(index),
        } = entry
        {
            let err = CharClass::from(*class).validate(input.as_str()).unwrap_err();
            assert_eq!(err.position, *index, "{input:?}");
            assert_eq!(err.unit, u32::from(input.as_bytes()[*index]));
        }
    }
}
