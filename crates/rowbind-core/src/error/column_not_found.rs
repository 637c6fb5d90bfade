use super::Error;

/// Error when a column is looked up by a name the table does not have.
#[derive(Debug)]
pub(super) struct ColumnNotFound {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for ColumnNotFound {}

impl core::fmt::Display for ColumnNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` not found in table `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ColumnNotFound(ColumnNotFound {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a column not found error.
    pub fn is_column_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnNotFound(_))
    }
}
