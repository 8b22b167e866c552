use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Interpreter, SourceMode, Status};
use crate::engine::Sta;
use crate::error::{Error, Result};

/// Calls observed by [`FakeInterpreter`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Init,
    RegisterCommands,
    Eval(String),
    Source(PathBuf, SourceMode),
    Flush,
}

/// Records every call and answers with configurable statuses
#[derive(Default)]
pub struct FakeInterpreter {
    pub calls: Vec<Call>,
    pub sta: Option<Arc<Sta>>,
    pub fail_init: bool,
    pub failing_scripts: HashSet<String>,
    pub failing_sources: HashSet<PathBuf>,
}

impl FakeInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evals(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Eval(script) => Some(script.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sources(&self) -> Vec<(&Path, SourceMode)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Source(path, mode) => Some((path.as_path(), *mode)),
                _ => None,
            })
            .collect()
    }
}

impl Interpreter for FakeInterpreter {
    fn name(&self) -> &str {
        "fake"
    }

    fn init(&mut self) -> Result<()> {
        self.calls.push(Call::Init);
        if self.fail_init {
            return Err(Error::InterpreterInit("no standard library".to_string()));
        }
        Ok(())
    }

    fn register_commands(&mut self, sta: Arc<Sta>) -> Result<()> {
        self.calls.push(Call::RegisterCommands);
        self.sta = Some(sta);
        Ok(())
    }

    fn eval(&mut self, _name: &str, script: &str) -> Status {
        self.calls.push(Call::Eval(script.to_string()));
        if self.failing_scripts.contains(script) {
            Status::Error
        } else {
            Status::Ok
        }
    }

    fn source(&mut self, path: &Path, mode: SourceMode) -> Status {
        self.calls.push(Call::Source(path.to_path_buf(), mode));
        if self.failing_sources.contains(path) {
            Status::Error
        } else {
            Status::Ok
        }
    }

    fn flush(&mut self) {
        self.calls.push(Call::Flush);
    }
}
