use std::fmt;

#[derive(Debug)]
pub enum CaseworkError {
    BadToml,
    Regex,
    CreateDirectory,
    LogFile,
}

impl std::error::Error for CaseworkError {}

impl fmt::Display for CaseworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseworkError::BadToml => write!(f, "Failed to parse TOML data"),
            CaseworkError::Regex => write!(f, "Invalid regex provided"),
            CaseworkError::CreateDirectory => write!(f, "Could not create directory(ies)"),
            CaseworkError::LogFile => write!(f, "Could not create log file"),
        }
    }
}
