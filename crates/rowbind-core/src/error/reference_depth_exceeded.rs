use super::Error;

/// Error when expanding reference bindings follows a route longer than the
/// configured maximum depth.
#[derive(Debug)]
pub(super) struct ReferenceDepthExceeded {
    max_depth: usize,
    table: Box<str>,
    route: Vec<Box<str>>,
}

impl std::error::Error for ReferenceDepthExceeded {}

impl core::fmt::Display for ReferenceDepthExceeded {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "reference route exceeds max depth {}, current table: `{}`, reference route: [{}]",
            self.max_depth,
            self.table,
            self.route.join(", ")
        )
    }
}

impl Error {
    /// Creates a reference depth error.
    ///
    /// `route` lists the tables from the current one back to the root of the
    /// expansion.
    pub fn reference_depth_exceeded<I, S>(
        max_depth: usize,
        table: impl Into<String>,
        route: I,
    ) -> Error
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::from(super::ErrorKind::ReferenceDepthExceeded(
            ReferenceDepthExceeded {
                max_depth,
                table: table.into().into(),
                route: route.into_iter().map(|t| t.into().into()).collect(),
            },
        ))
    }

    /// Returns `true` if this error is a reference depth error.
    pub fn is_reference_depth_exceeded(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ReferenceDepthExceeded(_))
    }
}
