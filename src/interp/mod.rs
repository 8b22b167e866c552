pub mod commands;
#[cfg(test)]
pub mod fake;
pub mod python;
pub mod scripts;

use std::path::Path;
use std::sync::Arc;

use crate::engine::Sta;
use crate::error::Result;

pub use python::PythonInterpreter;

/// Result of evaluating a script or sourcing a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

/// How `source` treats a missing file and evaluation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMode {
    pub suppress_missing: bool,
    pub suppress_errors: bool,
}

impl SourceMode {
    /// Used for the per-user init file
    pub const QUIET: SourceMode = SourceMode {
        suppress_missing: true,
        suppress_errors: true,
    };

    /// Used for the command file given on the command line
    pub const STRICT: SourceMode = SourceMode {
        suppress_missing: false,
        suppress_errors: false,
    };
}

/// The embedded command interpreter as seen by startup
pub trait Interpreter {
    /// Short name recorded by the analysis engine
    fn name(&self) -> &str;

    /// Bring up the interpreter's own standard environment
    fn init(&mut self) -> Result<()>;

    /// Make the native `sta` commands available to scripts
    fn register_commands(&mut self, sta: Arc<Sta>) -> Result<()>;

    /// Evaluate a script; `name` identifies it in error reports
    fn eval(&mut self, name: &str, script: &str) -> Status;

    /// Evaluate the contents of a file
    fn source(&mut self, path: &Path, mode: SourceMode) -> Status;

    /// Drain buffered interpreter output
    fn flush(&mut self);
}
