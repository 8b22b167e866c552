use std::path::Path;
use std::sync::Arc;

use pyo3::exceptions::PySystemExit;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyString};
use tracing::debug;

use super::{Interpreter, SourceMode, Status, commands};
use crate::engine::Sta;
use crate::error::{Error, Result};
use crate::repl::ReplBackend;

/// Embedded CPython interpreter. Every script runs in the `__main__`
/// namespace so definitions carry over into the interactive loop.
pub struct PythonInterpreter;

impl PythonInterpreter {
    pub fn new() -> Self {
        Python::initialize();
        Self
    }
}

impl Default for PythonInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile `source` under `filename` and run it in `__main__`.
///
/// `source` is either a `str` or the raw `bytes` of a file; bytes let the
/// compiler honour a coding declaration.
fn exec_in_main<'py>(py: Python<'py>, source: Bound<'py, PyAny>, filename: &str) -> PyResult<()> {
    let globals = py.import("__main__")?.dict();
    let builtins = py.import("builtins")?;

    // Compile first so the traceback names the file
    let code = builtins
        .getattr("compile")?
        .call1((source, filename, "exec"))?;
    builtins.getattr("exec")?.call1((code, globals))?;
    Ok(())
}

/// Print the traceback, or leave the process if the script asked to exit
fn report(py: Python<'_>, err: PyErr) {
    if err.is_instance_of::<PySystemExit>(py) {
        let status = exit_status(py, &err);
        flush_streams(py);
        std::process::exit(status);
    }
    err.print(py);
}

/// Status carried by a SystemExit, following the interpreter's own rules
fn exit_status(py: Python<'_>, err: &PyErr) -> i32 {
    let Ok(code) = err.value(py).getattr("code") else {
        return 1;
    };
    if code.is_none() {
        return 0;
    }
    match code.extract::<i32>() {
        Ok(status) => status,
        Err(_) => {
            eprintln!("{code}");
            1
        }
    }
}

fn flush_streams(py: Python<'_>) {
    if let Ok(sys) = py.import("sys") {
        for stream in ["stdout", "stderr"] {
            if let Ok(stream) = sys.getattr(stream) {
                let _ = stream.call_method0("flush");
            }
        }
    }
}

impl Interpreter for PythonInterpreter {
    fn name(&self) -> &str {
        "python"
    }

    fn init(&mut self) -> Result<()> {
        Python::attach(|py| -> PyResult<()> {
            // Site packages and the REPL's completeness checker
            py.import("site")?;
            py.import("codeop")?;
            Ok(())
        })
        .map_err(|e| Error::InterpreterInit(e.to_string()))
    }

    fn register_commands(&mut self, sta: Arc<Sta>) -> Result<()> {
        Python::attach(|py| commands::register(py, sta))
            .map_err(|e| Error::RegisterCommands(e.to_string()))
    }

    fn eval(&mut self, name: &str, script: &str) -> Status {
        Python::attach(|py| {
            let source = PyString::new(py, script).into_any();
            match exec_in_main(py, source, name) {
                Ok(()) => Status::Ok,
                Err(err) => {
                    report(py, err);
                    Status::Error
                }
            }
        })
    }

    fn source(&mut self, path: &Path, mode: SourceMode) -> Status {
        // Read the file
        let source = match std::fs::read(path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && mode.suppress_missing => {
                debug!(path = %path.display(), "skipping missing file");
                return Status::Ok;
            }
            Err(err) => {
                if mode.suppress_errors {
                    debug!(path = %path.display(), "cannot read file: {err}");
                } else {
                    eprintln!("Error: couldn't read file \"{}\": {}", path.display(), err);
                }
                return Status::Error;
            }
        };

        // Run it in __main__
        let filename = path.to_string_lossy();
        Python::attach(|py| {
            let source = PyBytes::new(py, &source).into_any();
            match exec_in_main(py, source, &filename) {
                Ok(()) => Status::Ok,
                Err(err) if mode.suppress_errors && !err.is_instance_of::<PySystemExit>(py) => {
                    debug!(path = %path.display(), "ignoring error: {err}");
                    Status::Error
                }
                Err(err) => {
                    report(py, err);
                    Status::Error
                }
            }
        })
    }

    fn flush(&mut self) {
        Python::attach(flush_streams);
    }
}

impl ReplBackend for PythonInterpreter {
    fn is_complete(&self, code: &str) -> bool {
        Python::attach(|py| {
            let result = py
                .import("codeop")
                .and_then(|codeop| codeop.getattr("compile_command"))
                .and_then(|compile_cmd| compile_cmd.call1((code,)));

            match result {
                Ok(obj) if obj.is_none() => false, // incomplete
                Ok(_) => true,
                Err(_) => true, // let the syntax error surface on execution
            }
        })
    }

    fn execute(&mut self, code: &str) {
        Python::attach(|py| {
            if let Err(err) = execute_line(py, code) {
                report(py, err);
            }
        });
        self.flush();
    }
}

/// Evaluate as an expression and echo the result, else run as statements
fn execute_line(py: Python<'_>, line: &str) -> PyResult<()> {
    let builtins = py.import("builtins")?;
    let compiled = builtins
        .getattr("compile")?
        .call1((line, "<stdin>", "eval"));

    match compiled {
        Ok(code) => {
            let globals = py.import("__main__")?.dict();
            let result = builtins.getattr("eval")?.call1((code, globals))?;
            if !result.is_none() {
                println!("{}", result.repr()?);
            }
            Ok(())
        }
        // statements, not an expression
        Err(_) => exec_in_main(py, PyString::new(py, line).into_any(), "<stdin>"),
    }
}
