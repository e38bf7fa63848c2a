//! Rewrites local file paths into the paths the test process sees.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One substitution rule. `from` is a regular expression; `to` may refer to its groups as `$1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapRule {
    pub from: String,
    pub to: String,
}

impl RemapRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    fn pattern(&self) -> Option<Regex> {
        match Regex::new(&self.from) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(
                    pattern = %self.from,
                    error = %err,
                    "remap pattern is not a valid regex, matching literally"
                );
                Regex::new(&regex::escape(&self.from)).ok()
            }
        }
    }
}

/// Apply the first rule whose pattern matches `path`; return `path` unchanged when none do.
pub fn remap_path(path: &str, rules: &[RemapRule]) -> String {
    for rule in rules {
        let Some(re) = rule.pattern() else { continue };
        if re.is_match(path) {
            return re.replace(path, rule.to.as_str()).into_owned();
        }
    }
    path.to_string()
}
