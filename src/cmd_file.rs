use std::path::Path;

use tracing::debug;

use crate::interp::{Interpreter, SourceMode, Status};

/// Source the command file named on the command line, reporting errors
pub fn run<I: Interpreter>(interp: &mut I, path: &Path) -> Status {
    debug!(path = %path.display(), "sourcing command file");
    let status = interp.source(path, SourceMode::STRICT);
    debug!(?status, "command file finished");
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::fake::FakeInterpreter;

    #[test]
    fn sources_strictly_and_passes_status_through() {
        let mut interp = FakeInterpreter::new();
        let path = Path::new("run.py");
        assert_eq!(run(&mut interp, path), Status::Ok);
        assert_eq!(interp.sources(), vec![(path, SourceMode::STRICT)]);

        interp.failing_sources.insert(path.to_path_buf());
        assert_eq!(run(&mut interp, path), Status::Error);
    }
}
