use super::Error;

/// Error when expanding reference bindings revisits a table already on the
/// current reference route.
#[derive(Debug)]
pub(super) struct CircularReference {
    table: Box<str>,
    route: Vec<Box<str>>,
}

impl std::error::Error for CircularReference {}

impl core::fmt::Display for CircularReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "circular reference detected, current table: `{}`, reference route: [{}]",
            self.table,
            self.route.join(", ")
        )
    }
}

impl Error {
    /// Creates a circular reference error.
    ///
    /// `route` lists the tables from the current one back to the root of the
    /// expansion.
    pub fn circular_reference<I, S>(table: impl Into<String>, route: I) -> Error
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::from(super::ErrorKind::CircularReference(CircularReference {
            table: table.into().into(),
            route: route.into_iter().map(|t| t.into().into()).collect(),
        }))
    }

    /// Returns `true` if this error is a circular reference error.
    pub fn is_circular_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CircularReference(_))
    }
}
