use tracing::debug;

use crate::config::StartupConfig;
use crate::interp::{Interpreter, SourceMode};

/// Source `<HOME>/<init_filename>` if it is a regular file.
///
/// Missing files and evaluation errors are ignored.
pub fn load<I: Interpreter>(interp: &mut I, config: &StartupConfig, suppressed: bool) {
    let Some(path) = config.init_path() else {
        debug!("HOME not set, skipping init file");
        return;
    };
    if suppressed {
        debug!(path = %path.display(), "init file suppressed");
        return;
    }
    if !path.is_file() {
        return;
    }

    debug!(path = %path.display(), "sourcing init file");
    interp.source(&path, SourceMode::QUIET);
}
