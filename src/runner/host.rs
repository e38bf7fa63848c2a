use crate::synth::DebugDescriptor;
use std::path::{Path, PathBuf};

/// Editor-side collaborators the runner depends on.
pub trait Host {
    /// Root of the first open workspace folder.
    fn workspace_root(&self) -> Option<PathBuf>;

    /// Path of the file in the active editor.
    fn active_file(&self) -> Option<String>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Save every dirty document. Completes before synthesis starts.
    fn save_all(&mut self);

    fn start_debugging(&mut self, descriptor: &DebugDescriptor);

    /// Non-blocking error notification shown to the user.
    fn notify_error(&mut self, message: &str);

    /// Tell the result presenter a run for `file` is in flight.
    fn set_pending(&mut self, _file: &str) {}
}
