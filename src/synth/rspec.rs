use super::debug::{DebugDescriptor, DebuggerProtocol, RdbgLaunch, RubyLspLaunch};
use super::output::OutputContract;
use super::target::{Addressing, RunTarget};
use super::{in_workspace_root, CommandSynthesizer};
use crate::config::ExecutionConfig;
use crate::error::Result;
use crate::parser::Framework;
use crate::remap::remap_path;
use crate::shell::words;
use tracing::debug;

const SPEC_DIRECTORY: &str = "spec";

/// RSpec: `rspec [--only-failures] -f <fmt> [-f j --out <file>] '<file[:line]>' [-e '<name>']`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RSpec;

/// Quoted file argument and optional example filter for a target.
struct Address {
    file: String,
    filter: Option<String>,
}

impl RSpec {
    fn address(&self, target: &RunTarget, config: &ExecutionConfig) -> Address {
        let dialect = config.dialect();
        let path = remap_path(&target.file_path, &config.rewrite_test_paths);
        match target.addressing() {
            Addressing::NamedGroup { name, .. } => Address {
                file: dialect.quote(&path),
                filter: Some(format!("-e {}", dialect.quote(name))),
            },
            Addressing::Line(line) => Address {
                file: dialect.quote(&format!("{}:{}", path, line)),
                filter: None,
            },
            Addressing::File => Address {
                file: dialect.quote(&path),
                filter: None,
            },
        }
    }

    /// Flags shared by the terminal command and both debug descriptors.
    fn flags(&self, target: &RunTarget, config: &ExecutionConfig) -> Vec<String> {
        let mut flags = Vec::new();
        if target.failed_only {
            flags.push("--only-failures".to_string());
        }
        flags.push(format!("-f {}", config.rspec_format));
        if config.rspec_decorate_editor_with_results {
            flags.push(
                OutputContract::new(&config.output_file_path, config.dialect()).json_report_flag(),
            );
        }
        flags
    }

    fn run_command(
        &self,
        file: &str,
        filter: Option<&str>,
        flags: &[String],
        config: &ExecutionConfig,
    ) -> String {
        let envs = config.dialect().stringify_envs(&config.rspec_env);
        let mut parts = vec![envs, config.rspec_command.clone()];
        parts.extend(flags.iter().cloned());
        parts.push(file.to_string());
        parts.extend(filter.map(str::to_string));
        words(parts)
    }
}

impl CommandSynthesizer for RSpec {
    fn framework(&self) -> Framework {
        Framework::RSpec
    }

    fn build_command(&self, target: &RunTarget, config: &ExecutionConfig) -> String {
        let address = self.address(target, config);
        let flags = self.flags(target, config);
        let run = self.run_command(&address.file, address.filter.as_deref(), &flags, config);
        let command = in_workspace_root(run, config);
        debug!(%command, "built rspec command");
        command
    }

    fn build_debug_descriptor(
        &self,
        target: &RunTarget,
        config: &ExecutionConfig,
    ) -> Result<DebugDescriptor> {
        let protocol: DebuggerProtocol = config.ruby_debugger.parse()?;
        let address = self.address(target, config);
        let flags = self.flags(target, config);

        let descriptor = match protocol {
            DebuggerProtocol::Rdbg => {
                let mut env = config.rspec_env.clone();
                env.extend(config.rspec_debug_env.clone());
                DebugDescriptor::Rdbg(RdbgLaunch {
                    name: "SpecRdbgDebugger".to_string(),
                    request: "launch".to_string(),
                    command: config.rspec_command.clone(),
                    script: words([Some(address.file), address.filter].into_iter().flatten()),
                    args: flags,
                    env,
                    ask_parameters: false,
                    use_terminal: true,
                    cwd: config.cwd(),
                })
            }
            DebuggerProtocol::RubyLsp => {
                let program = words(
                    std::iter::once(config.rspec_command.clone())
                        .chain(flags)
                        .chain(std::iter::once(address.file))
                        .chain(address.filter),
                );
                DebugDescriptor::RubyLsp(RubyLspLaunch {
                    name: "SpecRubyLSPDebugger".to_string(),
                    request: "launch".to_string(),
                    program,
                    env: config.rspec_env.clone(),
                    cwd: config.cwd(),
                })
            }
        };
        debug!(protocol = ?descriptor.protocol(), "built rspec debug descriptor");
        Ok(descriptor)
    }

    fn suite_directory(&self) -> Option<&'static str> {
        Some(SPEC_DIRECTORY)
    }

    fn build_suite_command(&self, config: &ExecutionConfig) -> Option<String> {
        let file = config.dialect().quote(&format!("{}/", SPEC_DIRECTORY));
        let flags = self.flags(&RunTarget::default(), config);
        let run = self.run_command(&file, None, &flags, config);
        Some(in_workspace_root(run, config))
    }
}
