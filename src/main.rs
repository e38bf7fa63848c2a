use clap::{Args, Parser, Subcommand, ValueEnum};
use ruby_spec_runner::{
    scan_regions, synthesize, synthesizer_for, ExecutionConfig, Framework, Instruction, RunError,
    RunTarget,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "ruby-spec-runner",
    version,
    about = "Locate Ruby tests and print the command that runs them."
)]
struct Cli {
    /// JSON settings file (camelCase keys). Missing keys take defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the test regions of a file as `line<TAB>name` (0-indexed lines).
    Regions { file: PathBuf },
    /// Print the shell command for a target.
    Command(TargetArgs),
    /// Print the debugger launch configuration for a target as JSON.
    Debug(TargetArgs),
    /// Print the command that runs the whole spec suite.
    AllSpecs,
}

#[derive(Debug, Args)]
struct TargetArgs {
    file: String,
    /// Run the example at this line (1-based).
    #[arg(long)]
    line: Option<usize>,
    /// Group name; requires --lines.
    #[arg(long)]
    name: Option<String>,
    /// Lines of the group's examples, comma separated.
    #[arg(long, value_delimiter = ',')]
    lines: Vec<usize>,
    #[arg(long)]
    failed_only: bool,
    /// Defaults to a guess from the file name.
    #[arg(long, value_enum)]
    framework: Option<FrameworkArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrameworkArg {
    Rspec,
    Minitest,
}

impl From<FrameworkArg> for Framework {
    fn from(arg: FrameworkArg) -> Self {
        match arg {
            FrameworkArg::Rspec => Framework::RSpec,
            FrameworkArg::Minitest => Framework::Minitest,
        }
    }
}

impl TargetArgs {
    fn framework(&self) -> Framework {
        self.framework
            .map(Framework::from)
            .or_else(|| Framework::for_path(&self.file))
            .unwrap_or(Framework::RSpec)
    }

    fn into_target(self, debugging: bool) -> RunTarget {
        RunTarget {
            file_path: self.file,
            line: self.line,
            example_name: self.name,
            line_set: (!self.lines.is_empty()).then_some(self.lines),
            debugging,
            failed_only: self.failed_only,
        }
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "aborted");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, RunError> {
    let config = match &cli.config {
        Some(path) => ExecutionConfig::from_file(path)?,
        None => ExecutionConfig::default(),
    };

    match cli.command {
        Command::Regions { file } => {
            let text = fs::read_to_string(&file).map_err(|source| RunError::Read {
                path: file.clone(),
                source,
            })?;
            Ok(scan_regions(&text)
                .iter()
                .map(|r| format!("{}\t{}", r.line(), r.display_name.as_deref().unwrap_or("")))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Command(args) => {
            let synth = synthesizer_for(args.framework());
            Ok(synth.build_command(&args.into_target(false), &config))
        }
        Command::Debug(args) => {
            let synth = synthesizer_for(args.framework());
            match synthesize(synth, &args.into_target(true), &config)? {
                Instruction::Debug(descriptor) => descriptor
                    .to_json()
                    .map_err(|e| RunError::Config(e.to_string())),
                Instruction::Command(command) => Ok(command),
            }
        }
        Command::AllSpecs => {
            if config.project_path.is_empty() {
                return Err(RunError::NoWorkspaceOpen);
            }
            let spec_dir = Path::new(&config.project_path).join("spec");
            if !spec_dir.is_dir() {
                return Err(RunError::MissingSpecDirectory(spec_dir));
            }
            synthesizer_for(Framework::RSpec)
                .build_suite_command(&config)
                .ok_or(RunError::MissingSpecDirectory(spec_dir))
        }
    }
}
