mod bootstrap;
mod cli;
mod cmd_file;
mod config;
mod engine;
mod error;
mod init_file;
mod interp;
mod logging;
mod repl;
mod usage;

use anyhow::Result;
use std::io;
use std::process;

use bootstrap::{Bootstrap, ExitDecision};
use cli::CommandLine;
use config::StartupConfig;
use interp::{Interpreter, PythonInterpreter};

fn main() -> Result<()> {
    logging::init();

    let cmdline = CommandLine::from_env();
    let config = StartupConfig::from_env();
    let bootstrap = Bootstrap::new(&cmdline, &config);
    let mut stdout = io::stdout();

    // -help and -version exit before the interpreter exists
    if let Some(code) = bootstrap.preflight(&mut stdout)?.and_then(ExitDecision::code) {
        process::exit(code);
    }

    let mut interp = PythonInterpreter::new();
    let decision = match bootstrap.start(&mut interp, &mut stdout) {
        Ok(decision) => decision,
        Err(err) => {
            interp.flush();
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    // The interpreter is never finalized; the process exits with it alive.
    if let Some(code) = decision.code() {
        interp.flush();
        process::exit(code);
    }

    repl::run(&mut interp)?;
    interp.flush();
    Ok(())
}
