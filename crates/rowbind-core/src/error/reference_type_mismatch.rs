use super::Error;

/// Error when the property a reference binding reads does not hold the
/// entity mapped by the referenced table.
#[derive(Debug)]
pub(super) struct ReferenceTypeMismatch {
    entity: Box<str>,
    property: Box<str>,
    table: Box<str>,
}

impl std::error::Error for ReferenceTypeMismatch {}

impl core::fmt::Display for ReferenceTypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "property `{}::{}` does not hold the entity of referenced table `{}`",
            self.entity, self.property, self.table
        )
    }
}

impl Error {
    pub fn reference_type_mismatch(
        entity: impl Into<String>,
        property: impl Into<String>,
        table: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::ReferenceTypeMismatch(
            ReferenceTypeMismatch {
                entity: entity.into().into(),
                property: property.into().into(),
                table: table.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a reference type mismatch error.
    pub fn is_reference_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ReferenceTypeMismatch(_))
    }
}
