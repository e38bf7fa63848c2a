//! User-configurable knobs for command synthesis.

use crate::error::{Result, RunError};
use crate::remap::RemapRule;
use crate::shell::Dialect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable snapshot of the runner settings. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecutionConfig {
    pub rspec_command: String,
    pub rspec_format: String,
    pub rspec_env: BTreeMap<String, String>,
    pub rspec_debug_env: BTreeMap<String, String>,
    pub rspec_decorate_editor_with_results: bool,
    pub minitest_command: String,
    pub minitest_env: BTreeMap<String, String>,
    pub minitest_decorate_editor_with_results: bool,
    pub change_directory_to_workspace_root: bool,
    pub project_path: String,
    pub rewrite_test_paths: Vec<RemapRule>,
    pub shell: Dialect,
    pub using_bash_in_windows: bool,
    /// Raw protocol name; validated when a debug descriptor is built.
    pub ruby_debugger: String,
    pub save_before_running: bool,
    pub clear_terminal_on_test_run: bool,
    pub output_file_path: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            rspec_command: "bundle exec rspec".to_string(),
            rspec_format: "progress".to_string(),
            rspec_env: BTreeMap::new(),
            rspec_debug_env: BTreeMap::new(),
            rspec_decorate_editor_with_results: true,
            minitest_command: "bundle exec rails t".to_string(),
            minitest_env: BTreeMap::new(),
            minitest_decorate_editor_with_results: true,
            change_directory_to_workspace_root: true,
            project_path: String::new(),
            rewrite_test_paths: Vec::new(),
            shell: Dialect::Posix,
            using_bash_in_windows: false,
            ruby_debugger: "rdbg".to_string(),
            save_before_running: false,
            clear_terminal_on_test_run: false,
            output_file_path: std::env::temp_dir()
                .join("ruby-spec-runner-output.json")
                .to_string_lossy()
                .into_owned(),
        }
    }
}

impl ExecutionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RunError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RunError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// The dialect actually spoken by the terminal. Bash on Windows is POSIX.
    pub fn dialect(&self) -> Dialect {
        if self.using_bash_in_windows {
            Dialect::Posix
        } else {
            self.shell
        }
    }

    /// Working directory for debug sessions, when the cd policy is on.
    pub fn cwd(&self) -> Option<String> {
        self.change_directory_to_workspace_root
            .then(|| self.project_path.clone())
    }
}
