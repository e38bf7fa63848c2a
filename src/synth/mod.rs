//! Command and debug-descriptor synthesis, one synthesizer per framework.

mod debug;
mod minitest;
mod output;
mod rspec;
mod target;

pub use debug::{DebugDescriptor, DebuggerProtocol, RdbgLaunch, RubyLspLaunch};
pub use minitest::{name_filter_regex, Minitest};
pub use output::{line_set_label, OutputContract};
pub use rspec::RSpec;
pub use target::{Addressing, RunTarget};

use crate::config::ExecutionConfig;
use crate::error::Result;
use crate::parser::Framework;
use crate::shell::ReturnCommand;

/// Stateless mapping from `(target, config)` to an instruction for the host.
pub trait CommandSynthesizer {
    fn framework(&self) -> Framework;

    /// Shell command that runs `target` in the configured terminal dialect.
    fn build_command(&self, target: &RunTarget, config: &ExecutionConfig) -> String;

    /// Launch configuration for the configured debugger protocol.
    fn build_debug_descriptor(
        &self,
        target: &RunTarget,
        config: &ExecutionConfig,
    ) -> Result<DebugDescriptor>;

    /// Directory, relative to the workspace root, holding the whole suite.
    fn suite_directory(&self) -> Option<&'static str> {
        None
    }

    /// Command that runs the whole suite, if the framework supports it.
    fn build_suite_command(&self, _config: &ExecutionConfig) -> Option<String> {
        None
    }
}

/// Either a shell command for the terminal or a descriptor for the debugger.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Command(String),
    Debug(DebugDescriptor),
}

/// Build whichever instruction the target asks for.
pub fn synthesize(
    synth: &dyn CommandSynthesizer,
    target: &RunTarget,
    config: &ExecutionConfig,
) -> Result<Instruction> {
    if target.debugging {
        synth
            .build_debug_descriptor(target, config)
            .map(Instruction::Debug)
    } else {
        Ok(Instruction::Command(synth.build_command(target, config)))
    }
}

pub fn synthesizer_for(framework: Framework) -> &'static dyn CommandSynthesizer {
    match framework {
        Framework::RSpec => &RSpec,
        Framework::Minitest => &Minitest,
    }
}

/// Run `command` from the workspace root when the cd policy is on, without
/// leaking the directory change into the caller's shell where the dialect allows.
pub(crate) fn in_workspace_root(command: String, config: &ExecutionConfig) -> String {
    if !config.change_directory_to_workspace_root {
        return command;
    }

    let dialect = config.dialect();
    let (cd, ret) = dialect.cd_commands(&config.project_path);
    match ret {
        ReturnCommand::Subshell => format!("({})", dialect.join(&[cd, command])),
        ReturnCommand::None => dialect.join(&[cd, command]),
        ReturnCommand::Command(back) => dialect.join(&[cd, command, back]),
    }
}
