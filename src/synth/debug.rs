use crate::error::RunError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Debugger protocols a launch descriptor can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebuggerProtocol {
    Rdbg,
    RubyLsp,
}

impl FromStr for DebuggerProtocol {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rdbg" => Ok(DebuggerProtocol::Rdbg),
            "ruby_lsp" => Ok(DebuggerProtocol::RubyLsp),
            other => Err(RunError::UnknownDebuggerProtocol(other.to_string())),
        }
    }
}

/// Launch configuration for the `rdbg` debug adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdbgLaunch {
    pub name: String,
    pub request: String,
    pub command: String,
    pub script: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub ask_parameters: bool,
    /// Without a terminal rdbg prefixes absolute script paths with `./`.
    pub use_terminal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

/// Launch configuration for the Ruby LSP debugger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubyLspLaunch {
    pub name: String,
    pub request: String,
    pub program: String,
    pub env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

/// Structured debug launch request, tagged by protocol the way launch.json expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DebugDescriptor {
    #[serde(rename = "rdbg")]
    Rdbg(RdbgLaunch),
    #[serde(rename = "ruby_lsp")]
    RubyLsp(RubyLspLaunch),
}

impl DebugDescriptor {
    pub fn protocol(&self) -> DebuggerProtocol {
        match self {
            DebugDescriptor::Rdbg(_) => DebuggerProtocol::Rdbg,
            DebugDescriptor::RubyLsp(_) => DebuggerProtocol::RubyLsp,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
