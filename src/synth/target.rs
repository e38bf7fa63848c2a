/// What the user asked to run.
///
/// `line` and `line_set` are in the numbering the test framework expects
/// (1-based); convert from region lines before building a target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTarget {
    pub file_path: String,
    pub line: Option<usize>,
    pub example_name: Option<String>,
    pub line_set: Option<Vec<usize>>,
    pub debugging: bool,
    /// Re-run only the examples that failed last time (RSpec `--only-failures`).
    pub failed_only: bool,
}

/// How a target is addressed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing<'a> {
    /// Every example under a `describe`/`context` block, selected by name.
    NamedGroup { name: &'a str, lines: &'a [usize] },
    /// A single example, `path:line`.
    Line(usize),
    /// The whole file.
    File,
}

impl RunTarget {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
            ..Self::default()
        }
    }

    pub fn at_line(path: impl Into<String>, line: usize) -> Self {
        Self {
            line: Some(line),
            ..Self::file(path)
        }
    }

    pub fn named_group(
        path: impl Into<String>,
        name: impl Into<String>,
        lines: Vec<usize>,
    ) -> Self {
        Self {
            example_name: Some(name.into()),
            line_set: Some(lines),
            ..Self::file(path)
        }
    }

    pub fn addressing(&self) -> Addressing<'_> {
        match (&self.example_name, &self.line_set) {
            (Some(name), Some(lines)) if !lines.is_empty() => {
                Addressing::NamedGroup { name, lines }
            }
            _ => match self.line {
                Some(line) => Addressing::Line(line),
                None => Addressing::File,
            },
        }
    }
}
