use super::Error;

/// Error when a binder operation targets a column that already carries a
/// binding. The existing binding is left untouched.
#[derive(Debug)]
pub(super) struct AlreadyBound {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for AlreadyBound {}

impl core::fmt::Display for AlreadyBound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column `{}.{}` is already bound", self.table, self.column)
    }
}

impl Error {
    pub fn already_bound(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AlreadyBound(AlreadyBound {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an already bound error.
    pub fn is_already_bound(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AlreadyBound(_))
    }
}
