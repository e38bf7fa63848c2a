use super::debug::{DebugDescriptor, DebuggerProtocol, RdbgLaunch, RubyLspLaunch};
use super::output::OutputContract;
use super::target::{Addressing, RunTarget};
use super::CommandSynthesizer;
use crate::config::ExecutionConfig;
use crate::error::Result;
use crate::parser::Framework;
use crate::remap::remap_path;
use crate::shell::words;
use tracing::debug;

/// Minitest: `<cmd> '<file[:line]>' [-n '/<name>/'] [| tee -a <out>]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Minitest;

struct Address<'t> {
    file: String,
    filter: Option<String>,
    lines: Option<Vec<usize>>,
    local_path: &'t str,
}

impl Minitest {
    fn address<'t>(&self, target: &'t RunTarget, config: &ExecutionConfig) -> Address<'t> {
        let dialect = config.dialect();
        let path = remap_path(&target.file_path, &config.rewrite_test_paths);
        let (file, filter, lines) = match target.addressing() {
            Addressing::NamedGroup { name, lines } => (
                dialect.quote(&path),
                Some(format!("-n {}", dialect.quote(&name_filter_regex(name)))),
                Some(lines.to_vec()),
            ),
            Addressing::Line(line) => (
                dialect.quote(&format!("{}:{}", path, line)),
                None,
                Some(vec![line]),
            ),
            Addressing::File => (dialect.quote(&path), None, None),
        };
        Address {
            file,
            filter,
            lines,
            local_path: &target.file_path,
        }
    }
}

impl CommandSynthesizer for Minitest {
    fn framework(&self) -> Framework {
        Framework::Minitest
    }

    fn build_command(&self, target: &RunTarget, config: &ExecutionConfig) -> String {
        let dialect = config.dialect();
        let address = self.address(target, config);

        let run = words([
            Some(dialect.stringify_envs(&config.minitest_env)),
            Some(config.minitest_command.clone()),
            Some(address.file),
            address.filter,
        ]
        .into_iter()
        .flatten());

        let cd = if config.change_directory_to_workspace_root {
            format!("cd {}", dialect.quote(&config.project_path))
        } else {
            String::new()
        };

        let command = if config.minitest_decorate_editor_with_results {
            let contract = OutputContract::new(&config.output_file_path, dialect);
            let [save_file, save_lines] =
                contract.record_run(address.local_path, address.lines.as_deref());
            dialect.join(&[cd, save_file, save_lines, words([run, contract.capture()])])
        } else {
            dialect.join(&[cd, run])
        };
        debug!(%command, "built minitest command");
        command
    }

    fn build_debug_descriptor(
        &self,
        target: &RunTarget,
        config: &ExecutionConfig,
    ) -> Result<DebugDescriptor> {
        let protocol: DebuggerProtocol = config.ruby_debugger.parse()?;
        let address = self.address(target, config);

        let descriptor = match protocol {
            DebuggerProtocol::Rdbg => DebugDescriptor::Rdbg(RdbgLaunch {
                name: "MinitestRdbgDebugger".to_string(),
                request: "launch".to_string(),
                command: config.minitest_command.clone(),
                script: words([Some(address.file), address.filter].into_iter().flatten()),
                args: Vec::new(),
                env: config.minitest_env.clone(),
                ask_parameters: false,
                use_terminal: true,
                cwd: config.cwd(),
            }),
            DebuggerProtocol::RubyLsp => DebugDescriptor::RubyLsp(RubyLspLaunch {
                name: "MinitestRubyLSPDebugger".to_string(),
                request: "launch".to_string(),
                program: words(
                    [Some(config.minitest_command.clone()), Some(address.file), address.filter]
                        .into_iter()
                        .flatten(),
                ),
                env: config.minitest_env.clone(),
                cwd: config.cwd(),
            }),
        };
        debug!(protocol = ?descriptor.protocol(), "built minitest debug descriptor");
        Ok(descriptor)
    }
}

/// Ruby regex literal `/<name>/` with every double quote not already preceded by a
/// backslash escaped. Callers quote the result for the shell.
pub fn name_filter_regex(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 4);
    let mut prev = None;
    for ch in name.chars() {
        if ch == '"' && prev != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
        prev = Some(ch);
    }
    format!("/{}/", escaped)
}
