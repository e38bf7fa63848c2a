//! Finds RSpec and Minitest test definitions in Ruby source and builds the
//! shell command or debugger launch configuration that runs exactly them.

pub mod config;
pub mod error;
pub mod parser;
pub mod remap;
pub mod runner;
pub mod shell;
pub mod synth;

pub use config::ExecutionConfig;
pub use error::{Result, RunError};
pub use parser::{scan_regions, Framework, RegionLocator, TestRegion};
pub use remap::{remap_path, RemapRule};
pub use shell::Dialect;
pub use synth::{
    synthesize, synthesizer_for, CommandSynthesizer, DebugDescriptor, Instruction, Minitest,
    RSpec, RunTarget,
};
