// tests/interactive_simulation.rs
// Simulates editor-driven runs against fake host and terminal collaborators

use ruby_spec_runner::runner::{Host, RunRequest, Terminal, TerminalSlot, TestRunner};
use ruby_spec_runner::{DebugDescriptor, ExecutionConfig, Framework, Instruction};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Default)]
struct FakeHost {
    root: Option<PathBuf>,
    active: Option<String>,
    dirs: Vec<PathBuf>,
    saves: usize,
    launched: Vec<DebugDescriptor>,
    errors: Vec<String>,
    pending: Vec<String>,
}

impl Host for FakeHost {
    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn active_file(&self) -> Option<String> {
        self.active.clone()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d == path)
    }

    fn save_all(&mut self) {
        self.saves += 1;
    }

    fn start_debugging(&mut self, descriptor: &DebugDescriptor) {
        self.launched.push(descriptor.clone());
    }

    fn notify_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn set_pending(&mut self, file: &str) {
        self.pending.push(file.to_string());
    }
}

#[derive(Debug, Default)]
struct TerminalLog {
    created: usize,
    sent: Vec<String>,
    clears: usize,
}

struct FakeTerminal {
    id: usize,
    alive: Rc<RefCell<bool>>,
    log: Rc<RefCell<TerminalLog>>,
}

impl Terminal for FakeTerminal {
    fn is_alive(&self) -> bool {
        *self.alive.borrow()
    }

    fn clear(&mut self) {
        self.log.borrow_mut().clears += 1;
    }

    fn send_text(&mut self, text: &str) {
        self.log.borrow_mut().sent.push(format!("#{} {}", self.id, text));
    }
}

// Helper: a runner whose terminals report into a shared log
fn create_runner(
    framework: Framework,
    config: ExecutionConfig,
    host: FakeHost,
) -> (TestRunner<FakeHost, FakeTerminal>, Rc<RefCell<TerminalLog>>, Rc<RefCell<bool>>) {
    let log = Rc::new(RefCell::new(TerminalLog::default()));
    let alive = Rc::new(RefCell::new(true));
    let (factory_log, factory_alive) = (log.clone(), alive.clone());
    let slot = TerminalSlot::new(move || {
        let id = {
            let mut log = factory_log.borrow_mut();
            log.created += 1;
            log.created
        };
        *factory_alive.borrow_mut() = true;
        FakeTerminal {
            id,
            alive: factory_alive.clone(),
            log: factory_log.clone(),
        }
    });
    (TestRunner::new(framework, config, host, slot), log, alive)
}

fn plain_config() -> ExecutionConfig {
    ExecutionConfig {
        project_path: "/proj".to_string(),
        change_directory_to_workspace_root: false,
        rspec_decorate_editor_with_results: false,
        minitest_decorate_editor_with_results: false,
        ..ExecutionConfig::default()
    }
}

#[cfg(test)]
mod interactive_tests {
    use super::*;

    #[test]
    fn test_explicit_target_is_sent_to_terminal() {
        let (mut runner, log, _) =
            create_runner(Framework::RSpec, plain_config(), FakeHost::default());

        let request = RunRequest {
            file_path: Some("/proj/spec/a_spec.rb".to_string()),
            line: Some(12),
            ..RunRequest::default()
        };
        let instruction = runner.run(Some(request));

        let expected = "bundle exec rspec -f progress '/proj/spec/a_spec.rb:12'";
        assert_eq!(instruction, Some(Instruction::Command(expected.to_string())));
        assert_eq!(log.borrow().sent, vec![format!("#1 {}", expected)]);
        assert_eq!(runner.host().pending, vec!["/proj/spec/a_spec.rb"]);
    }

    #[test]
    fn test_active_file_is_used_without_request() {
        let host = FakeHost {
            active: Some("/proj/test/a_test.rb".to_string()),
            ..FakeHost::default()
        };
        let (mut runner, log, _) = create_runner(Framework::Minitest, plain_config(), host);

        runner.run(None);

        assert_eq!(log.borrow().sent, vec!["#1 bundle exec rails t '/proj/test/a_test.rb'"]);
    }

    #[test]
    fn test_no_active_editor_is_notified() {
        let (mut runner, log, _) =
            create_runner(Framework::RSpec, plain_config(), FakeHost::default());

        assert_eq!(runner.run(None), None);

        assert!(log.borrow().sent.is_empty());
        assert_eq!(runner.host().errors.len(), 1);
        assert!(runner.host().errors[0].contains("no editor is open"));
    }

    #[test]
    fn test_save_happens_before_run() {
        let config = ExecutionConfig {
            save_before_running: true,
            ..plain_config()
        };
        let host = FakeHost {
            active: Some("/proj/spec/a_spec.rb".to_string()),
            ..FakeHost::default()
        };
        let (mut runner, _, _) = create_runner(Framework::RSpec, config, host);

        runner.run(None);
        runner.run_failed_examples();

        assert_eq!(runner.host().saves, 2);
    }

    #[test]
    fn test_failed_examples_use_only_failures() {
        let host = FakeHost {
            active: Some("/proj/spec/a_spec.rb".to_string()),
            ..FakeHost::default()
        };
        let (mut runner, log, _) = create_runner(Framework::RSpec, plain_config(), host);

        runner.run_failed_examples();

        assert_eq!(
            log.borrow().sent,
            vec!["#1 bundle exec rspec --only-failures -f progress '/proj/spec/a_spec.rb'"]
        );
    }

    #[test]
    fn test_terminal_is_reused_then_recreated() {
        let config = ExecutionConfig {
            clear_terminal_on_test_run: true,
            ..plain_config()
        };
        let host = FakeHost {
            active: Some("/proj/spec/a_spec.rb".to_string()),
            ..FakeHost::default()
        };
        let (mut runner, log, alive) = create_runner(Framework::RSpec, config, host);

        runner.run(None);
        runner.run(None);
        assert_eq!(log.borrow().created, 1);

        // Simulate the user closing the terminal
        *alive.borrow_mut() = false;
        runner.run(None);

        let log = log.borrow();
        assert_eq!(log.created, 2);
        assert_eq!(log.clears, 3);
        assert!(log.sent[2].starts_with("#2 "));
    }

    #[test]
    fn test_debug_request_launches_debugger() {
        let (mut runner, log, _) =
            create_runner(Framework::Minitest, plain_config(), FakeHost::default());

        let request = RunRequest {
            file_path: Some("/proj/test/a_test.rb".to_string()),
            name: Some("adds".to_string()),
            for_lines: Some(vec![3, 4]),
            debugging: true,
            ..RunRequest::default()
        };
        let instruction = runner.run(Some(request));

        assert!(matches!(instruction, Some(Instruction::Debug(DebugDescriptor::Rdbg(_)))));
        assert_eq!(runner.host().launched.len(), 1);
        assert!(log.borrow().sent.is_empty());
    }

    #[test]
    fn test_unknown_debugger_notifies_without_launch() {
        let config = ExecutionConfig {
            ruby_debugger: "pry".to_string(),
            ..plain_config()
        };
        let (mut runner, _, _) = create_runner(Framework::RSpec, config, FakeHost::default());

        let request = RunRequest {
            file_path: Some("/proj/spec/a_spec.rb".to_string()),
            debugging: true,
            ..RunRequest::default()
        };
        assert_eq!(runner.run(Some(request)), None);

        assert!(runner.host().launched.is_empty());
        assert!(runner.host().pending.is_empty());
        assert!(runner.host().errors[0].contains("pry"));
    }

    #[test]
    fn test_minitest_failed_only_is_not_run() {
        let config = ExecutionConfig {
            save_before_running: true,
            ..plain_config()
        };
        let host = FakeHost {
            active: Some("/proj/test/a_test.rb".to_string()),
            ..FakeHost::default()
        };
        let (mut runner, log, _) = create_runner(Framework::Minitest, config, host);

        assert_eq!(runner.run_failed_examples(), None);

        assert!(log.borrow().sent.is_empty());
        assert!(runner.host().pending.is_empty());
        assert_eq!(runner.host().saves, 0);
    }

    #[test]
    fn test_run_all_examples() {
        let host = FakeHost {
            root: Some(PathBuf::from("/proj")),
            dirs: vec![PathBuf::from("/proj/spec")],
            ..FakeHost::default()
        };
        let (mut runner, log, _) = create_runner(Framework::RSpec, plain_config(), host);

        runner.run_all_examples();

        assert_eq!(log.borrow().sent, vec!["#1 bundle exec rspec -f progress 'spec/'"]);
    }

    #[test]
    fn test_run_all_without_workspace() {
        let (mut runner, _, _) =
            create_runner(Framework::RSpec, plain_config(), FakeHost::default());

        assert_eq!(runner.run_all_examples(), None);
        assert!(runner.host().errors[0].contains("no workspace is open"));
    }

    #[test]
    fn test_run_all_without_spec_directory() {
        let host = FakeHost {
            root: Some(PathBuf::from("/proj")),
            ..FakeHost::default()
        };
        let (mut runner, log, _) = create_runner(Framework::RSpec, plain_config(), host);

        assert_eq!(runner.run_all_examples(), None);
        assert!(log.borrow().sent.is_empty());
        assert!(runner.host().errors[0].contains("No spec directory found"));
    }
}
