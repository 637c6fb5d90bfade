use super::Error;

/// Error when a selector reads a property the entity does not declare.
///
/// This points at a selector written against a stale or mismatched entity
/// descriptor and is not something callers are expected to recover from.
#[derive(Debug)]
pub(super) struct UnknownProperty {
    entity: Box<str>,
    property: Box<str>,
}

impl std::error::Error for UnknownProperty {}

impl core::fmt::Display for UnknownProperty {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` has no property `{}`",
            self.entity, self.property
        )
    }
}

impl Error {
    pub fn unknown_property(entity: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownProperty(UnknownProperty {
            entity: entity.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown property error.
    pub fn is_unknown_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownProperty(_))
    }
}
