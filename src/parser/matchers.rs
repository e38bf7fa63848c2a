use once_cell::sync::Lazy;
use regex::Regex;

// `it`/`should`, optional (possibly parenthesised) quoted title, then a block opener.
static EXAMPLE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*(?:it|should)\b(?:\s*\(?\s*(?P<title>'.*'|".*")\s*\)?)?\s*(?:do|\{)\s*(?:#.*)?$"#,
    )
    .unwrap()
});

static TEST_METHOD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*def\s+(?P<unit_def>test_\w+)(?:\(\))?\s*(?:#.*)?$").unwrap()
});

/// Result of matching one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub name: Option<String>,
}

/// Recognises a test definition on a single line and extracts its name.
pub trait LineMatcher {
    fn match_line(&self, line: &str) -> Option<LineMatch>;
}

/// Spec-style examples: `it 'works' do`, `should("x") {`, `it do # note`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExampleBlockMatcher;

impl LineMatcher for ExampleBlockMatcher {
    fn match_line(&self, line: &str) -> Option<LineMatch> {
        let caps = EXAMPLE_BLOCK_REGEX.captures(line)?;
        Some(LineMatch {
            name: caps.name("title").map(|m| m.as_str().to_string()),
        })
    }
}

/// Unit-style tests: `def test_something` with optional empty parens.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestMethodMatcher;

impl LineMatcher for TestMethodMatcher {
    fn match_line(&self, line: &str) -> Option<LineMatch> {
        let caps = TEST_METHOD_REGEX.captures(line)?;
        Some(LineMatch {
            name: caps.name("unit_def").map(|m| m.as_str().to_string()),
        })
    }
}
