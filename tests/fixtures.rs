/// Fixture-driven character class tests
///
/// Cases live in `tests/fixtures/char_class_cases.json` so new
/// regressions can be added without touching Rust code.
#[path = "fixtures/fixture_loader.rs"]
mod fixture_loader;

#[path = "fixtures/fixture_tests.rs"]
mod fixture_tests;
