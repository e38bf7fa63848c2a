use crate::shell::Dialect;

/// Writes run metadata and captured framework output to the side file
/// read by the result presenter.
///
/// File layout: line 1 is the file that ran, line 2 the JSON line set or
/// `ALL`, then the framework report.
#[derive(Debug, Clone, Copy)]
pub struct OutputContract<'a> {
    path: &'a str,
    dialect: Dialect,
}

impl<'a> OutputContract<'a> {
    pub fn new(path: &'a str, dialect: Dialect) -> Self {
        Self { path, dialect }
    }

    /// The two bookkeeping commands: truncate-write the file path, then append the line set.
    pub fn record_run(&self, file: &str, lines: Option<&[usize]>) -> [String; 2] {
        let out = self.dialect.quote(self.path);
        [
            format!("echo {} > {}", self.dialect.quote(file), out),
            format!("echo {} >> {}", self.dialect.quote(&line_set_label(lines)), out),
        ]
    }

    /// Pipe suffix that appends the command's stdout to the side file.
    pub fn capture(&self) -> String {
        format!("| {}", self.dialect.tee(self.path, true))
    }

    /// RSpec formatter flag that writes its JSON report straight to the side file.
    pub fn json_report_flag(&self) -> String {
        format!("-f j --out {}", self.dialect.quote(self.path))
    }
}

/// JSON array of line numbers, or `ALL` when the run is not restricted.
pub fn line_set_label(lines: Option<&[usize]>) -> String {
    match lines {
        Some(lines) if !lines.is_empty() => {
            serde_json::to_string(lines).unwrap_or_else(|_| "ALL".to_string())
        }
        _ => "ALL".to_string(),
    }
}
