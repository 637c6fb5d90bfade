use super::Error;

/// Error when a binder operation runs on a table that has no entity type.
///
/// Selectors are evaluated against the table's entity descriptor, so a table
/// created without one can hold columns but cannot bind them.
#[derive(Debug)]
pub(super) struct UnconfiguredEntity {
    table: Box<str>,
}

impl std::error::Error for UnconfiguredEntity {}

impl core::fmt::Display for UnconfiguredEntity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no entity configured for table: `{}`", self.table)
    }
}

impl Error {
    /// Creates an unconfigured entity error naming the table.
    pub fn unconfigured_entity(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnconfiguredEntity(UnconfiguredEntity {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is an unconfigured entity error.
    pub fn is_unconfigured_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnconfiguredEntity(_))
    }
}
