use std::path::PathBuf;

/// Per-user init file read from the home directory
pub const INIT_FILENAME: &str = ".sta";

/// Environment-derived settings, read once at startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub init_filename: String,
    pub home: Option<PathBuf>,
}

impl StartupConfig {
    /// `HOME` only; an unset or empty value disables the init file
    pub fn from_env() -> Self {
        let home = std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);
        Self {
            init_filename: INIT_FILENAME.to_string(),
            home,
        }
    }

    pub fn init_path(&self) -> Option<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(&self.init_filename))
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            init_filename: INIT_FILENAME.to_string(),
            home: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_path_joins_home_and_filename() {
        let config = StartupConfig {
            home: Some(PathBuf::from("/home/user")),
            ..StartupConfig::default()
        };
        assert_eq!(config.init_path(), Some(PathBuf::from("/home/user/.sta")));
    }

    #[test]
    fn no_home_means_no_init_path() {
        assert_eq!(StartupConfig::default().init_path(), None);
    }
}
