/// Loader for JSON character class fixtures
use http_chars::CharClass;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ClassName {
    Authority,
    Host,
    Token,
    FieldValue,
}

impl From<ClassName> for CharClass {
    fn from(name: ClassName) -> Self {
        match name {
            ClassName::Authority => Self::Authority,
            ClassName::Host => Self::Host,
            ClassName::Token => Self::Token,
            ClassName::FieldValue => Self::FieldValue,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum FixtureEntry {
    /// A scan case
    Case {
        class: ClassName,
        input: String,
        index: Option<usize>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub class: CharClass,
    pub input: String,
    pub expected: Option<usize>,
    pub actual: Option<usize>,
}

pub const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/char_class_cases.json"
);

/// Load every fixture entry, comments included
pub fn load_fixtures() -> Result<Vec<FixtureEntry>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(FIXTURE_PATH)?;
    Ok(serde_json::from_str(&content)?)
}

/// Run all scan cases, collecting mismatches instead of stopping at the first one
pub fn run_fixtures(entries: &[FixtureEntry]) -> (usize, Vec<FixtureFailure>) {
    let mut passed = 0;
    let mut failures = Vec::new();

    for (case_num, entry) in entries.iter().enumerate() {
        let FixtureEntry::Case {
            class,
            input,
            index,
        } = entry
        else {
            continue;
        };

        let class = CharClass::from(*class);
        let actual = class.index_of_invalid(input.as_str());
        if actual == *index {
            passed += 1;
        } else {
            failures.push(FixtureFailure {
                case_num,
                class,
                input: input.clone(),
                expected: *index,
                actual,
            });
        }
    }

    (passed, failures)
}
