use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::engine::Sta;
use crate::usage::VERSION;

/// Native commands bound to the analysis engine, exposed as `sta.engine`
#[pyclass(frozen, name = "Engine", module = "sta")]
pub struct EngineCommands {
    sta: Arc<Sta>,
}

#[pymethods]
impl EngineCommands {
    fn thread_count(&self) -> usize {
        self.sta.thread_count()
    }

    fn set_thread_count(&self, count: usize) -> PyResult<()> {
        if count == 0 {
            return Err(PyValueError::new_err(
                "thread count must be a positive integer",
            ));
        }
        self.sta.set_thread_count(count);
        Ok(())
    }

    fn version(&self) -> &'static str {
        self.sta.version()
    }

    fn ready(&self) -> bool {
        self.sta.components_ready()
    }

    fn interpreter(&self) -> Option<String> {
        self.sta.interpreter().map(str::to_string)
    }

    fn __repr__(&self) -> String {
        format!(
            "<sta engine {} threads={}>",
            self.sta.version(),
            self.sta.thread_count()
        )
    }
}

/// Build the `sta` module and register it in `sys.modules`
pub fn register(py: Python<'_>, sta: Arc<Sta>) -> PyResult<()> {
    let module = PyModule::new(py, "sta")?;
    module.add("__version__", VERSION)?;
    module.add_class::<EngineCommands>()?;
    module.add("engine", Py::new(py, EngineCommands { sta })?)?;

    py.import("sys")?
        .getattr("modules")?
        .set_item("sta", module)?;
    Ok(())
}
