use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shell syntax family the terminal speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// sh, bash, zsh, and bash on Windows.
    #[default]
    Posix,
    Fish,
    /// The default Windows terminal.
    #[serde(alias = "windows")]
    PowerShell,
}

/// How a directory change is undone after the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnCommand {
    /// Wrap everything in `( ... )` so the `cd` stays in a subshell.
    Subshell,
    /// The shell cannot group; the `cd` is left in place.
    None,
    /// An explicit command that restores the directory.
    Command(String),
}

impl Dialect {
    /// Quote a single shell word. Always quotes, even when the word is safe bare.
    pub fn quote(self, s: &str) -> String {
        match self {
            Dialect::Posix => format!("'{}'", s.replace('\'', r"'\''")),
            Dialect::Fish => format!("'{}'", s.replace('\\', r"\\").replace('\'', r"\'")),
            Dialect::PowerShell => format!("'{}'", s.replace('\'', "''")),
        }
    }

    /// The separator placed between sequential commands.
    pub fn separator(self) -> &'static str {
        match self {
            Dialect::Posix => " && ",
            Dialect::Fish | Dialect::PowerShell => "; ",
        }
    }

    /// Join non-empty commands with the dialect separator.
    pub fn join<S: AsRef<str>>(self, parts: &[S]) -> String {
        parts
            .iter()
            .map(|p| p.as_ref().trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(self.separator())
    }

    pub fn cd_commands(self, path: &str) -> (String, ReturnCommand) {
        match self {
            Dialect::Posix => (format!("cd {}", self.quote(path)), ReturnCommand::Subshell),
            // Fish parses `( ... )` as command substitution.
            Dialect::Fish => (format!("cd {}", self.quote(path)), ReturnCommand::None),
            Dialect::PowerShell => (
                format!("pushd {}", self.quote(path)),
                ReturnCommand::Command("popd".to_string()),
            ),
        }
    }

    /// Render an environment map as a command prefix. Keys are emitted in sorted order.
    pub fn stringify_envs(self, env: &BTreeMap<String, String>) -> String {
        match self {
            Dialect::Posix | Dialect::Fish => env
                .iter()
                .map(|(k, v)| {
                    let value = shlex::try_quote(v)
                        .map(|q| q.into_owned())
                        .unwrap_or_else(|_| self.quote(v));
                    format!("{}={}", k, value)
                })
                .collect::<Vec<_>>()
                .join(" "),
            Dialect::PowerShell => env
                .iter()
                .map(|(k, v)| format!("$env:{}={};", k, self.quote(v)))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// A pipe target that copies stdin to `path` while passing it through.
    pub fn tee(self, path: &str, append: bool) -> String {
        match self {
            Dialect::Posix | Dialect::Fish => {
                let flag = if append { "-a " } else { "" };
                format!("tee {}{}", flag, self.quote(path))
            }
            Dialect::PowerShell => {
                let flag = if append { "-Append " } else { "" };
                format!("Tee-Object {}-FilePath {}", flag, self.quote(path))
            }
        }
    }
}
