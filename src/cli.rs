use std::ffi::{OsStr, OsString};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const HELP: &str = "-help";
pub const VERSION: &str = "-version";
pub const NO_INIT: &str = "-no_init";
pub const NO_SPLASH: &str = "-no_splash";
pub const EXIT: &str = "-exit";
pub const THREADS: &str = "-threads";

/// Flags that are consumed by startup and never count as positional arguments
const STARTUP_FLAGS: [&str; 3] = [NO_INIT, NO_SPLASH, EXIT];

/// Requested worker thread count for the analysis engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadCount {
    /// Use every available hardware thread
    Max,
    Count(NonZeroUsize),
}

impl ThreadCount {
    /// Parse a `-threads` value token
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("max") {
            return Ok(ThreadCount::Max);
        }
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidThreadCount(value.to_string()));
        }
        value
            .parse::<NonZeroUsize>()
            .map(ThreadCount::Count)
            .map_err(|_| Error::InvalidThreadCount(value.to_string()))
    }

    /// Resolve to a concrete thread count
    pub fn resolve(self) -> usize {
        match self {
            ThreadCount::Max => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            ThreadCount::Count(n) => n.get(),
        }
    }
}

/// The process argument vector; index 0 is the program name.
///
/// Queries never consume or reorder arguments, so every question can be
/// asked as many times as needed. Arguments stay as `OsString` so a
/// command file path reaches the filesystem byte for byte.
#[derive(Debug, Clone)]
pub struct CommandLine {
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    pub fn program(&self) -> &str {
        self.args
            .first()
            .and_then(|arg| arg.to_str())
            .unwrap_or("sta")
    }

    /// True if the only argument after the program name is `flag`
    pub fn is_sole(&self, flag: &str) -> bool {
        self.args.len() == 2 && self.args[1].to_str() == Some(flag)
    }

    /// True if `flag` appears as an exact token anywhere after the program name
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().skip(1).any(|arg| arg.to_str() == Some(flag))
    }

    /// Value of `-threads`, if given
    pub fn thread_count(&self) -> Result<Option<ThreadCount>> {
        let Some(pos) = self
            .args
            .iter()
            .skip(1)
            .position(|arg| arg.to_str() == Some(THREADS))
        else {
            return Ok(None);
        };
        match self.args.get(pos + 2) {
            Some(value) => match value.to_str() {
                Some(value) => ThreadCount::parse(value).map(Some),
                None => Err(Error::InvalidThreadCount(
                    value.to_string_lossy().into_owned(),
                )),
            },
            None => Err(Error::MissingThreadCount),
        }
    }

    /// Arguments left over once the startup flags and the `-threads` value
    /// are set aside.
    pub fn positionals(&self) -> Vec<&OsStr> {
        let mut positionals = Vec::new();
        let mut iter = self.args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.to_str() {
                // the value token belongs to -threads
                Some(THREADS) => {
                    iter.next();
                }
                Some(flag) if STARTUP_FLAGS.contains(&flag) => {}
                _ => positionals.push(arg.as_os_str()),
            }
        }
        positionals
    }

    /// The command file to source, if the arguments are well formed.
    pub fn command_file(&self) -> Result<Option<PathBuf>> {
        match self.positionals().as_slice() {
            [] => Ok(None),
            [arg] if arg.as_encoded_bytes().starts_with(b"-") => Err(
                Error::UnexpectedArgument(arg.to_string_lossy().into_owned()),
            ),
            [arg] if arg.is_empty() => Ok(None),
            [arg] => Ok(Some(expand_tilde(arg))),
            extra => Err(Error::TooManyArguments(
                extra
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
        }
    }
}

/// Expand a leading `~/` using the user's home directory
fn expand_tilde(path: &OsStr) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|path| path.strip_prefix("~/"))
        && let Some(home) = home::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
