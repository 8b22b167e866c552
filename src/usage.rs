use std::io::{self, Write};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write the command line help
pub fn print_usage(out: &mut impl Write, prog: &str, init_filename: &str) -> io::Result<()> {
    writeln!(
        out,
        "Usage: {prog} [-help] [-version] [-no_init] [-no_splash] [-threads count|max] [-exit] cmd_file"
    )?;
    writeln!(out, "  -help              show help and exit")?;
    writeln!(out, "  -version           show version and exit")?;
    writeln!(out, "  -no_init           do not read {init_filename} init file")?;
    writeln!(out, "  -threads count|max use count threads")?;
    writeln!(out, "  -no_splash         do not show the license splash at startup")?;
    writeln!(out, "  -exit              exit after reading cmd_file")?;
    writeln!(out, "  cmd_file           source cmd_file")?;
    out.flush()
}

pub fn print_version(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{VERSION}")?;
    out.flush()
}
