use std::fmt;

#[derive(Debug)]
pub(crate) enum BrowserHistoryError {
    SqliteParse,
    BadSql,
}

impl std::error::Error for BrowserHistoryError {}

impl fmt::Display for BrowserHistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserHistoryError::SqliteParse => {
                write!(f, "Failed to read SQLITE history store")
            }
            BrowserHistoryError::BadSql => {
                write!(f, "Failed to compose history SQL query")
            }
        }
    }
}
