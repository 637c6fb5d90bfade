use super::Error;

/// Error when a selector reads a property off an entity the recorded path
/// has already moved past, e.g. `|e| { e.get("department"); e.get("name") }`.
///
/// A property path is a single chain; every read must continue from the
/// value returned by the previous one.
#[derive(Debug)]
pub(super) struct BranchedPath {
    entity: Box<str>,
    property: Box<str>,
}

impl std::error::Error for BranchedPath {}

impl core::fmt::Display for BranchedPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "selector read `{}::{}` after the property path moved past `{}`",
            self.entity, self.property, self.entity
        )
    }
}

impl Error {
    pub fn branched_path(entity: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::BranchedPath(BranchedPath {
            entity: entity.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is a branched path error.
    pub fn is_branched_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::BranchedPath(_))
    }
}
