/// Inclusive span of physical lines, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }
}

/// A source line that opens a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRegion {
    pub line_range: LineRange,
    /// Quoted title (quotes included) for `it`/`should`, method name for `def test_*`.
    pub display_name: Option<String>,
}

impl TestRegion {
    pub fn line(&self) -> usize {
        self.line_range.start
    }

    /// Display name with the surrounding quote characters removed.
    pub fn title(&self) -> Option<&str> {
        let name = self.display_name.as_deref()?;
        let mut chars = name.chars();
        match (chars.next(), chars.next_back()) {
            (Some(open @ ('\'' | '"')), Some(close)) if open == close && name.len() >= 2 => {
                Some(&name[1..name.len() - 1])
            }
            _ => Some(name),
        }
    }
}

/// Test framework a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    RSpec,
    Minitest,
}

impl Framework {
    /// Guess the framework from the file name: `*_spec.rb` is RSpec, `*_test.rb` and
    /// `test_*.rb` are Minitest.
    pub fn for_path(path: &str) -> Option<Self> {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        if file_name.ends_with("_spec.rb") {
            Some(Framework::RSpec)
        } else if file_name.ends_with("_test.rb")
            || (file_name.starts_with("test_") && file_name.ends_with(".rb"))
        {
            Some(Framework::Minitest)
        } else {
            None
        }
    }
}
