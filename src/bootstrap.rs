use std::io::Write;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cli::{self, CommandLine};
use crate::cmd_file;
use crate::config::StartupConfig;
use crate::engine::Sta;
use crate::error::{Error, Result};
use crate::init_file;
use crate::interp::Interpreter;
use crate::interp::scripts::{BOOTSTRAP_COMMAND, INIT_SCRIPTS, SPLASH_COMMAND};
use crate::usage;

/// What the process does once startup is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Hand control to the interactive loop
    Interactive,
    Success,
    Failure,
}

impl ExitDecision {
    /// Process exit status, `None` when startup continues interactively
    pub fn code(self) -> Option<i32> {
        match self {
            ExitDecision::Interactive => None,
            ExitDecision::Success => Some(0),
            ExitDecision::Failure => Some(1),
        }
    }
}

/// Drives startup from the argument vector to the interactive handoff
pub struct Bootstrap<'a> {
    cmdline: &'a CommandLine,
    config: &'a StartupConfig,
}

impl<'a> Bootstrap<'a> {
    pub fn new(cmdline: &'a CommandLine, config: &'a StartupConfig) -> Self {
        Self { cmdline, config }
    }

    /// Handle `-help` and `-version`, which never start the interpreter
    pub fn preflight(&self, out: &mut impl Write) -> Result<Option<ExitDecision>> {
        if self.cmdline.is_sole(cli::HELP) {
            usage::print_usage(out, self.cmdline.program(), &self.config.init_filename)?;
            return Ok(Some(ExitDecision::Success));
        }
        if self.cmdline.is_sole(cli::VERSION) {
            usage::print_version(out)?;
            return Ok(Some(ExitDecision::Success));
        }
        Ok(None)
    }

    /// Run every startup step against `interp`
    pub fn start<I: Interpreter>(
        &self,
        interp: &mut I,
        out: &mut impl Write,
    ) -> Result<ExitDecision> {
        if let Err(err) = self.init_runtime(interp) {
            if err.is_usage() {
                return self.usage_failure(interp, out, &err);
            }
            return Err(err);
        }

        if !self.cmdline.has_flag(cli::NO_SPLASH) {
            interp.eval("show_splash", SPLASH_COMMAND);
        }

        init_file::load(interp, self.config, self.cmdline.has_flag(cli::NO_INIT));

        let exit_after_cmd_file = self.cmdline.has_flag(cli::EXIT);
        let cmd_file = match self.cmdline.command_file() {
            Ok(cmd_file) => cmd_file,
            Err(err) => return self.usage_failure(interp, out, &err),
        };

        if let Some(path) = cmd_file {
            let status = cmd_file::run(interp, &path);
            if exit_after_cmd_file {
                return Ok(if status.is_ok() {
                    ExitDecision::Success
                } else {
                    ExitDecision::Failure
                });
            }
        }

        debug!("startup complete");
        Ok(ExitDecision::Interactive)
    }

    /// Build the engine, bind it to the interpreter and load the
    /// embedded command scripts.
    fn init_runtime<I: Interpreter>(&self, interp: &mut I) -> Result<()> {
        if let Err(err) = interp.init() {
            warn!("{err}; continuing with sta commands only");
        }

        // Engine setup
        let mut sta = Sta::new();
        sta.make_components();
        sta.set_interpreter(interp.name());
        let thread_count = match self.cmdline.thread_count()? {
            Some(requested) => requested.resolve(),
            None => sta.thread_count(),
        };
        sta.set_thread_count(thread_count);

        // Native commands go in before the scripts that call them
        interp.register_commands(Arc::new(sta))?;

        // Embedded scripts in order, then the command installer
        for script in INIT_SCRIPTS {
            debug!(script = script.name, "evaluating init script");
            if !interp.eval(script.name, script.source).is_ok() {
                return Err(Error::InitScript {
                    name: script.name.to_string(),
                });
            }
        }
        if !interp.eval("init_sta_cmds", BOOTSTRAP_COMMAND).is_ok() {
            return Err(Error::InitScript {
                name: BOOTSTRAP_COMMAND.to_string(),
            });
        }

        Ok(())
    }

    fn usage_failure<I: Interpreter>(
        &self,
        interp: &mut I,
        out: &mut impl Write,
        err: &Error,
    ) -> Result<ExitDecision> {
        debug!("usage error: {err}");
        interp.flush();
        usage::print_usage(out, self.cmdline.program(), &self.config.init_filename)?;
        Ok(ExitDecision::Failure)
    }
}
