use std::fmt;

#[derive(Debug)]
pub(crate) enum ReportError {
    CreateDirectory,
    CreateFile,
    WriteReport,
}

impl std::error::Error for ReportError {}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::CreateDirectory => write!(f, "Could not create report directory"),
            ReportError::CreateFile => write!(f, "Could not create report file"),
            ReportError::WriteReport => write!(f, "Could not write report file"),
        }
    }
}
