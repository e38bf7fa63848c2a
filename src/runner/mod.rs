//! Invocation boundary: resolves a target, synthesizes, and hands the
//! result to the terminal or debugger. Errors end here as notifications.

mod host;
mod terminal;

pub use host::Host;
pub use terminal::{Terminal, TerminalSlot};

use crate::config::ExecutionConfig;
use crate::error::{Result, RunError};
use crate::parser::Framework;
use crate::synth::{synthesize, synthesizer_for, CommandSynthesizer, Instruction, RunTarget};
use tracing::{error, info, warn};

/// A run request from a keybinding, code lens, or command palette entry.
/// Without a file the active editor's file is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    pub file_path: Option<String>,
    pub line: Option<usize>,
    pub name: Option<String>,
    pub for_lines: Option<Vec<usize>>,
    pub debugging: bool,
}

pub struct TestRunner<H, T> {
    synth: &'static dyn CommandSynthesizer,
    config: ExecutionConfig,
    host: H,
    terminal: TerminalSlot<T>,
}

impl<H: std::fmt::Debug, T> std::fmt::Debug for TestRunner<H, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestRunner")
            .field("framework", &self.synth.framework())
            .field("host", &self.host)
            .field("terminal", &self.terminal)
            .finish()
    }
}

impl<H: Host, T: Terminal> TestRunner<H, T> {
    pub fn new(
        framework: Framework,
        config: ExecutionConfig,
        host: H,
        terminal: TerminalSlot<T>,
    ) -> Self {
        Self {
            synth: synthesizer_for(framework),
            config,
            host,
            terminal,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        self.terminal.acquire()
    }

    /// Run the requested target, or the active file when none is given.
    pub fn run(&mut self, request: Option<RunRequest>) -> Option<Instruction> {
        self.save_if_configured();
        let result = self.resolve(request, false).and_then(|target| self.dispatch(&target));
        self.recover(result)
    }

    /// Re-run only the failures of the active file.
    pub fn run_failed_examples(&mut self) -> Option<Instruction> {
        if self.synth.framework() != Framework::RSpec {
            warn!(framework = ?self.synth.framework(), "failed-only runs are not supported");
            return None;
        }
        self.save_if_configured();
        let result = self.resolve(None, true).and_then(|target| self.dispatch(&target));
        self.recover(result)
    }

    /// Run the whole suite from the workspace's suite directory.
    pub fn run_all_examples(&mut self) -> Option<Instruction> {
        self.save_if_configured();
        let Some(dir) = self.synth.suite_directory() else {
            warn!(framework = ?self.synth.framework(), "suite runs are not supported");
            return None;
        };
        let result = self.suite_command(dir).map(|command| {
            self.send(&command);
            Instruction::Command(command)
        });
        self.recover(result)
    }

    fn suite_command(&self, dir: &str) -> Result<String> {
        let root = self.host.workspace_root().ok_or(RunError::NoWorkspaceOpen)?;
        let suite = root.join(dir);
        if !self.host.is_dir(&suite) {
            return Err(RunError::MissingSpecDirectory(suite));
        }
        self.synth
            .build_suite_command(&self.config)
            .ok_or(RunError::MissingSpecDirectory(suite))
    }

    fn resolve(&self, request: Option<RunRequest>, failed_only: bool) -> Result<RunTarget> {
        match request {
            Some(RunRequest {
                file_path: Some(file_path),
                line,
                name,
                for_lines,
                debugging,
            }) => Ok(RunTarget {
                file_path,
                line,
                example_name: name,
                line_set: for_lines,
                debugging,
                failed_only,
            }),
            other => {
                let file_path = self.host.active_file().ok_or(RunError::NoActiveTarget)?;
                Ok(RunTarget {
                    file_path,
                    debugging: other.is_some_and(|r| r.debugging),
                    failed_only,
                    ..RunTarget::default()
                })
            }
        }
    }

    fn dispatch(&mut self, target: &RunTarget) -> Result<Instruction> {
        let instruction = synthesize(self.synth, target, &self.config)?;
        match &instruction {
            Instruction::Command(command) => self.send(command),
            Instruction::Debug(descriptor) => self.host.start_debugging(descriptor),
        }
        self.host.set_pending(&target.file_path);
        Ok(instruction)
    }

    fn send(&mut self, command: &str) {
        let clear = self.config.clear_terminal_on_test_run;
        let terminal = self.terminal.acquire();
        if clear {
            terminal.clear();
        }
        info!(%command, "sending command to terminal");
        terminal.send_text(command);
    }

    fn save_if_configured(&mut self) {
        if self.config.save_before_running {
            self.host.save_all();
        }
    }

    fn recover(&mut self, result: Result<Instruction>) -> Option<Instruction> {
        match result {
            Ok(instruction) => Some(instruction),
            Err(err) => {
                error!(error = %err, "run aborted");
                self.host.notify_error(&err.to_string());
                None
            }
        }
    }
}
