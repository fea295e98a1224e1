use std::fmt;

#[derive(Debug)]
pub enum CaseError {
    NoFile,
    BadToml,
    MissingCaseDirectory,
    ReportOutput,
}

impl std::error::Error for CaseError {}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseError::NoFile => write!(f, "Failed to read TOML case file"),
            CaseError::BadToml => write!(f, "Failed to parse TOML data"),
            CaseError::MissingCaseDirectory => {
                write!(f, "Case directory does not exist")
            }
            CaseError::ReportOutput => write!(f, "Failed to write the case report"),
        }
    }
}
