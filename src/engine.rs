use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::usage::VERSION;

const DEFAULT_THREAD_COUNT: usize = 1;

/// Static timing analysis engine state shared with the native commands.
///
/// Constructed once by the bootstrapper and handed to the command layer as
/// an `Arc<Sta>`; nothing reassigns it afterwards.
#[derive(Debug)]
pub struct Sta {
    components_ready: bool,
    interpreter: Option<String>,
    thread_count: AtomicUsize,
}

impl Sta {
    pub fn new() -> Self {
        Self {
            components_ready: false,
            interpreter: None,
            thread_count: AtomicUsize::new(DEFAULT_THREAD_COUNT),
        }
    }

    pub fn make_components(&mut self) {
        self.components_ready = true;
        debug!("analysis components built");
    }

    pub fn components_ready(&self) -> bool {
        self.components_ready
    }

    /// Bind the command interpreter that drives this engine
    pub fn set_interpreter(&mut self, name: impl Into<String>) {
        self.interpreter = Some(name.into());
    }

    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count.load(Ordering::Relaxed)
    }

    /// Values below 1 are raised to 1
    pub fn set_thread_count(&self, count: usize) {
        let count = count.max(1);
        self.thread_count.store(count, Ordering::Relaxed);
        debug!(count, "thread count set");
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }
}

impl Default for Sta {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_before_startup() {
        let sta = Sta::new();
        assert!(!sta.components_ready());
        assert_eq!(sta.interpreter(), None);
        assert_eq!(sta.thread_count(), DEFAULT_THREAD_COUNT);
    }

    #[test]
    fn startup_sequence_updates_state() {
        let mut sta = Sta::new();
        sta.make_components();
        sta.set_interpreter("python");
        sta.set_thread_count(6);

        assert!(sta.components_ready());
        assert_eq!(sta.interpreter(), Some("python"));
        assert_eq!(sta.thread_count(), 6);
    }

    #[test]
    fn zero_threads_is_clamped() {
        let sta = Sta::new();
        sta.set_thread_count(0);
        assert_eq!(sta.thread_count(), 1);
    }
}
