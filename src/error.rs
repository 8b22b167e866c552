use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("too many arguments: {0}")]
    TooManyArguments(String),

    #[error("-threads requires a value")]
    MissingThreadCount,

    #[error("-threads must be max or a positive integer, got '{0}'")]
    InvalidThreadCount(String),

    #[error("interpreter initialization failed: {0}")]
    InterpreterInit(String),

    #[error("init script {name} failed")]
    InitScript { name: String },

    #[error("failed to register native commands: {0}")]
    RegisterCommands(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors that are reported by printing the usage text
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedArgument(_)
                | Error::TooManyArguments(_)
                | Error::MissingThreadCount
                | Error::InvalidThreadCount(_)
        )
    }
}
