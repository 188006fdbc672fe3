use thiserror::Error;

/// Structural element missing from a `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parse error: table name")]
    MissingTableName,
    #[error("parse error: column definitions")]
    MissingColumnDefinitions,
    #[error("parse error: no valid columns")]
    NoValidColumns,
}

impl ParseError {
    /// Short name of the element that could not be found.
    pub fn cause(&self) -> &'static str {
        match self {
            ParseError::MissingTableName => "table name",
            ParseError::MissingColumnDefinitions => "column definitions",
            ParseError::NoValidColumns => "no valid columns",
        }
    }
}
